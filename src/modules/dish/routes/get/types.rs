pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::envelope::Data};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Dish(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dish(dish) => (StatusCode::OK, Json(Data::new(dish))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchDish,
        DishNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Dish does not exist: {}", id) })),
                )
                    .into_response(),
                Self::FailedToFetchDish => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch dish" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
