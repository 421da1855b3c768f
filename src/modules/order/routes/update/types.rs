pub mod request {
    use crate::utils::envelope::Envelope;

    pub struct Payload {
        pub id: String,
        pub body: Envelope,
    }
}

pub mod response {
    use crate::{
        modules::order::{repository::Order, validation::ValidationError},
        utils::envelope::Data,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => {
                    (StatusCode::OK, Json(Data::new(order))).into_response()
                }
            }
        }
    }

    pub enum Error {
        OrderNotFound(String),
        InvalidPayload(ValidationError),
        FailedToUpdateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Order does not exist: {}", id) })),
                )
                    .into_response(),
                Self::InvalidPayload(err) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
                Self::FailedToUpdateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
