use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// The `{ "data": ... }` wrapper every request and response body travels in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Raw request document, unpacked only when a service asks for its `data`.
///
/// Extraction never rejects a body for its shape, so lookups such as
/// "does this id exist" still run before the payload is judged. Bodies that
/// are not JSON at all are kept as `null`.
#[derive(Debug, Clone, Default)]
pub struct Envelope(pub Value);

impl Envelope {
    pub fn data<T: DeserializeOwned>(self) -> Result<T, String> {
        let data = match self.0 {
            Value::Object(mut document) => document
                .remove("data")
                .ok_or_else(|| String::from("Request body must include a data object"))?,
            _ => return Err(String::from("Request body must be a JSON object")),
        };

        serde_json::from_value(data).map_err(|err| format!("Invalid data object: {}", err))
    }
}

#[async_trait]
impl<S> FromRequest<S> for Envelope
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let document = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|err| {
            tracing::debug!("Request body is not JSON: {}", err);
            Value::Null
        });

        Ok(Envelope(document))
    }
}
