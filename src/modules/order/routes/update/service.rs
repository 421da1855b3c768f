use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let current = repository::find_by_id(ctx.orders.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateOrder)?
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    let (order, status) = validation::parse(payload.body)
        .and_then(|order| validation::validate_id(&order, &payload.id).map(|_| order))
        .and_then(|order| {
            validation::validate_status(&current, &order).map(|status| (order, status))
        })
        .map_err(|err| {
            tracing::warn!("Failed to validate payload: {err}");
            response::Error::InvalidPayload(err)
        })?;

    repository::update_by_id(
        ctx.orders.as_ref(),
        payload.id,
        repository::UpdateOrderPayload {
            deliver_to: order.deliver_to,
            mobile_number: order.mobile_number,
            status,
            dishes: order.dishes,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateOrder)
    .map(|order| {
        tracing::debug!("Updated order {} to status {}", order.id, order.status);
        response::Success::OrderUpdated(order)
    })
}
