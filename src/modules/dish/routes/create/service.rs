use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish = validation::parse(payload.body).map_err(|err| {
        tracing::warn!("Failed to validate payload: {err}");
        response::Error::InvalidPayload(err)
    })?;

    repository::create(
        ctx.dishes.as_ref(),
        repository::CreateDishPayload {
            name: dish.name,
            description: dish.description,
            price: dish.price,
            image_url: dish.image_url,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateDish)
    .map(|dish| {
        tracing::debug!("Created dish {}", dish.id);
        response::Success::DishCreated(dish)
    })
}
