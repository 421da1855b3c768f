pub mod request {
    use crate::utils::envelope::Envelope;

    pub struct Payload {
        pub id: String,
        pub body: Envelope,
    }
}

pub mod response {
    use crate::{
        modules::dish::{repository::Dish, validation::ValidationError},
        utils::envelope::Data,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => (StatusCode::OK, Json(Data::new(dish))).into_response(),
            }
        }
    }

    pub enum Error {
        DishNotFound(String),
        InvalidPayload(ValidationError),
        FailedToUpdateDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Dish does not exist: {}", id) })),
                )
                    .into_response(),
                Self::InvalidPayload(err) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
                Self::FailedToUpdateDish => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update dish" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
