use crate::utils::{
    envelope::Envelope,
    validation::{matches_route_id, positive_integer, Field},
};
use serde::Deserialize;
use std::{borrow::Cow, fmt};
use validator::{Validate, ValidationErrors};

fn parse_price(price: &Field) -> Result<u64, validator::ValidationError> {
    match price {
        Field::Missing => Err(validator::ValidationError::new("MISSING_PRICE")
            .with_message(Cow::from("Dish must include a price"))),
        Field::Present(price) => positive_integer(price).ok_or_else(|| {
            validator::ValidationError::new("INVALID_PRICE").with_message(Cow::from(
                "Dish must have a price that is an integer greater than 0",
            ))
        }),
    }
}

fn validate_price(price: &Field) -> Result<(), validator::ValidationError> {
    parse_price(price).map(|_| ())
}

/// Dish fields as sent by the client, before any checks.
#[derive(Deserialize, Validate, Debug, Default)]
pub struct Body {
    pub id: Option<String>,
    #[validate(
        required(message = "Dish must include a name"),
        length(min = 1, message = "Dish must include a name")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Dish must include a description"),
        length(min = 1, message = "Dish must include a description")
    )]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_price"))]
    pub price: Field,
    #[validate(
        required(message = "Dish must include a image_url"),
        length(min = 1, message = "Dish must include a image_url")
    )]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidDish {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MalformedBody(String),
    MissingName,
    MissingDescription,
    MissingPrice,
    InvalidPrice,
    MissingImageUrl,
    IdMismatch { id: String, route_id: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody(reason) => write!(f, "{}", reason),
            Self::MissingName => write!(f, "Dish must include a name"),
            Self::MissingDescription => write!(f, "Dish must include a description"),
            Self::MissingPrice => write!(f, "Dish must include a price"),
            Self::InvalidPrice => write!(
                f,
                "Dish must have a price that is an integer greater than 0"
            ),
            Self::MissingImageUrl => write!(f, "Dish must include a image_url"),
            Self::IdMismatch { id, route_id } => write!(
                f,
                "Dish id does not match route id. Dish: {}, Route: {}",
                id, route_id
            ),
        }
    }
}

/// Picks the first failing field in the order name, description, price,
/// image_url.
fn first_violation(errors: &ValidationErrors) -> ValidationError {
    let fields = errors.field_errors();

    if fields.contains_key("name") {
        ValidationError::MissingName
    } else if fields.contains_key("description") {
        ValidationError::MissingDescription
    } else if let Some(price) = fields.get("price") {
        match price.first().map(|err| err.code.as_ref()) {
            Some("MISSING_PRICE") => ValidationError::MissingPrice,
            _ => ValidationError::InvalidPrice,
        }
    } else {
        ValidationError::MissingImageUrl
    }
}

pub fn validate(body: Body) -> Result<ValidDish, ValidationError> {
    body.validate().map_err(|errors| first_violation(&errors))?;

    let price = parse_price(&body.price).map_err(|_| ValidationError::InvalidPrice)?;

    Ok(ValidDish {
        id: body.id,
        name: body.name.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        price,
        image_url: body.image_url.unwrap_or_default(),
    })
}

/// Unpacks the request envelope, then validates the dish inside it.
pub fn parse(envelope: Envelope) -> Result<ValidDish, ValidationError> {
    envelope
        .data::<Body>()
        .map_err(ValidationError::MalformedBody)
        .and_then(validate)
}

pub fn validate_id(dish: &ValidDish, route_id: &str) -> Result<(), ValidationError> {
    match matches_route_id(dish.id.as_deref(), route_id) {
        true => Ok(()),
        false => Err(ValidationError::IdMismatch {
            id: dish.id.clone().unwrap_or_default(),
            route_id: route_id.to_string(),
        }),
    }
}
