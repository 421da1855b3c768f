use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_by_id(ctx.orders.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteOrder)?
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    validation::validate_pending(&order).map_err(|err| {
        tracing::warn!("Refusing to delete order {}: {err}", order.id);
        response::Error::OrderNotPending(err)
    })?;

    repository::delete_by_id(ctx.orders.as_ref(), payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteOrder)?
        .ok_or(response::Error::OrderNotFound(payload.id))
        .map(|order| {
            tracing::debug!("Deleted order {}", order.id);
            response::Success::OrderDeleted
        })
}
