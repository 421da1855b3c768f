use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(ctx.dishes.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?
        .ok_or_else(|| response::Error::DishNotFound(payload.id.clone()))?;

    let dish = validation::parse(payload.body)
        .and_then(|dish| validation::validate_id(&dish, &payload.id).map(|_| dish))
        .map_err(|err| {
            tracing::warn!("Failed to validate payload: {err}");
            response::Error::InvalidPayload(err)
        })?;

    repository::update_by_id(
        ctx.dishes.as_ref(),
        payload.id,
        repository::UpdateDishPayload {
            name: dish.name,
            description: dish.description,
            price: dish.price,
            image_url: dish.image_url,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateDish)
    .map(|dish| {
        tracing::debug!("Updated dish {}", dish.id);
        response::Success::DishUpdated(dish)
    })
}
