use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let (order, status) = validation::parse(payload.body)
        .and_then(|order| validation::initial_status(&order).map(|status| (order, status)))
        .map_err(|err| {
            tracing::warn!("Failed to validate payload: {err}");
            response::Error::InvalidPayload(err)
        })?;

    repository::create(
        ctx.orders.as_ref(),
        repository::CreateOrderPayload {
            deliver_to: order.deliver_to,
            mobile_number: order.mobile_number,
            status,
            dishes: order.dishes,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)
    .map(|order| {
        tracing::debug!("Created order {}", order.id);
        response::Success::OrderCreated(order)
    })
}
