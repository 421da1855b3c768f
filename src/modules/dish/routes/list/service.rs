use super::types::response;
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(ctx.dishes.as_ref())
        .await
        .map_err(|_| response::Error::FailedToFetchDishes)
        .map(response::Success::Dishes)
}
