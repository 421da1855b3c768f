use super::repository::{Order, OrderDish, OrderStatus};
use crate::utils::{
    envelope::Envelope,
    validation::{matches_route_id, positive_integer, Field},
};
use serde::Deserialize;
use serde_json::Value;
use std::{borrow::Cow, fmt};
use validator::{Validate, ValidationErrors};

fn parse_dishes(dishes: &Field) -> Result<Vec<OrderDish>, validator::ValidationError> {
    let entries = match dishes {
        Field::Missing | Field::Present(Value::Null) => {
            return Err(validator::ValidationError::new("MISSING_DISHES")
                .with_message(Cow::from("Order must include a dish")))
        }
        Field::Present(Value::Array(entries)) if !entries.is_empty() => entries,
        Field::Present(_) => {
            return Err(validator::ValidationError::new("EMPTY_DISHES")
                .with_message(Cow::from("Order must include at least one dish")))
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_dish(index, entry))
        .collect()
}

fn parse_dish(index: usize, entry: &Value) -> Result<OrderDish, validator::ValidationError> {
    let mut details = entry.as_object().cloned().unwrap_or_default();
    let quantity = details
        .remove("quantity")
        .as_ref()
        .and_then(positive_integer);

    match quantity {
        Some(quantity) => Ok(OrderDish { quantity, details }),
        None => {
            let mut err = validator::ValidationError::new("INVALID_QUANTITY").with_message(
                Cow::from(format!(
                    "Dish {} must have a quantity that is an integer greater than 0",
                    index
                )),
            );
            err.add_param(Cow::from("index"), &index);
            Err(err)
        }
    }
}

fn validate_dishes(dishes: &Field) -> Result<(), validator::ValidationError> {
    parse_dishes(dishes).map(|_| ())
}

/// Order fields as sent by the client, before any checks.
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub id: Option<String>,
    #[validate(
        required(message = "Order must include a deliverTo"),
        length(min = 1, message = "Order must include a deliverTo")
    )]
    pub deliver_to: Option<String>,
    #[validate(
        required(message = "Order must include a mobileNumber"),
        length(min = 1, message = "Order must include a mobileNumber")
    )]
    pub mobile_number: Option<String>,
    pub status: Option<Value>,
    #[serde(default)]
    #[validate(custom(function = "validate_dishes"))]
    pub dishes: Field,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder {
    pub id: Option<String>,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<Value>,
    pub dishes: Vec<OrderDish>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MalformedBody(String),
    MissingDeliverTo,
    MissingMobileNumber,
    MissingDishes,
    EmptyDishes,
    InvalidQuantity(usize),
    IdMismatch { id: String, route_id: String },
    DeliveredOrderImmutable,
    InvalidStatus,
    OrderNotPending,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody(reason) => write!(f, "{}", reason),
            Self::MissingDeliverTo => write!(f, "Order must include a deliverTo"),
            Self::MissingMobileNumber => write!(f, "Order must include a mobileNumber"),
            Self::MissingDishes => write!(f, "Order must include a dish"),
            Self::EmptyDishes => write!(f, "Order must include at least one dish"),
            Self::InvalidQuantity(index) => write!(
                f,
                "Dish {} must have a quantity that is an integer greater than 0",
                index
            ),
            Self::IdMismatch { id, route_id } => write!(
                f,
                "Order id does not match route id. Order: {}, Route: {}",
                id, route_id
            ),
            Self::DeliveredOrderImmutable => write!(f, "A delivered order cannot be changed"),
            Self::InvalidStatus => write!(
                f,
                "Order must have a status of pending, preparing, out-for-delivery, delivered"
            ),
            Self::OrderNotPending => {
                write!(f, "An order cannot be deleted unless it is pending")
            }
        }
    }
}

fn dishes_violation(err: &validator::ValidationError) -> ValidationError {
    match err.code.as_ref() {
        "MISSING_DISHES" => ValidationError::MissingDishes,
        "EMPTY_DISHES" => ValidationError::EmptyDishes,
        _ => ValidationError::InvalidQuantity(
            err.params
                .get("index")
                .and_then(Value::as_u64)
                .unwrap_or_default() as usize,
        ),
    }
}

/// Picks the first failing field in the order deliverTo, mobileNumber,
/// dishes.
fn first_violation(errors: &ValidationErrors) -> ValidationError {
    let fields = errors.field_errors();
    // Keyed by the Rust field name or its wire name, depending on how the
    // derive picks up serde renames.
    let failed = |names: [&str; 2]| names.iter().any(|name| fields.contains_key(*name));

    if failed(["deliver_to", "deliverTo"]) {
        ValidationError::MissingDeliverTo
    } else if failed(["mobile_number", "mobileNumber"]) {
        ValidationError::MissingMobileNumber
    } else {
        fields
            .get("dishes")
            .and_then(|errors| errors.first())
            .map(dishes_violation)
            .unwrap_or(ValidationError::MissingDishes)
    }
}

fn parse_status(status: &Value) -> Option<OrderStatus> {
    status.as_str().and_then(|status| status.parse().ok())
}

/// Checks the fields shared by create and update, stopping at the first
/// failure. Dish entries are checked in index order.
pub fn validate(body: Body) -> Result<ValidOrder, ValidationError> {
    body.validate().map_err(|errors| first_violation(&errors))?;

    let dishes = parse_dishes(&body.dishes).map_err(|err| dishes_violation(&err))?;

    Ok(ValidOrder {
        id: body.id,
        deliver_to: body.deliver_to.unwrap_or_default(),
        mobile_number: body.mobile_number.unwrap_or_default(),
        status: body.status,
        dishes,
    })
}

/// Unpacks the request envelope, then validates the order inside it.
pub fn parse(envelope: Envelope) -> Result<ValidOrder, ValidationError> {
    envelope
        .data::<Body>()
        .map_err(ValidationError::MalformedBody)
        .and_then(validate)
}

pub fn validate_id(order: &ValidOrder, route_id: &str) -> Result<(), ValidationError> {
    match matches_route_id(order.id.as_deref(), route_id) {
        true => Ok(()),
        false => Err(ValidationError::IdMismatch {
            id: order.id.clone().unwrap_or_default(),
            route_id: route_id.to_string(),
        }),
    }
}

/// New orders start out pending unless the client names a valid status.
pub fn initial_status(order: &ValidOrder) -> Result<OrderStatus, ValidationError> {
    match &order.status {
        None | Some(Value::Null) => Ok(OrderStatus::Pending),
        Some(Value::String(status)) if status.is_empty() => Ok(OrderStatus::Pending),
        Some(status) => parse_status(status).ok_or(ValidationError::InvalidStatus),
    }
}

/// Any listed status may follow any other, but a delivered order is final.
pub fn validate_status(
    current: &Order,
    order: &ValidOrder,
) -> Result<OrderStatus, ValidationError> {
    if current.status.is_terminal() {
        return Err(ValidationError::DeliveredOrderImmutable);
    }

    order
        .status
        .as_ref()
        .and_then(parse_status)
        .ok_or(ValidationError::InvalidStatus)
}

pub fn validate_pending(order: &Order) -> Result<(), ValidationError> {
    match order.status {
        OrderStatus::Pending => Ok(()),
        _ => Err(ValidationError::OrderNotPending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Body {
        serde_json::from_value(value).unwrap()
    }

    fn order_body() -> Value {
        json!({
            "deliverTo": "A",
            "mobileNumber": "555",
            "dishes": [{ "id": "1", "name": "Taco", "price": 8, "quantity": 2 }]
        })
    }

    fn stored(status: OrderStatus) -> Order {
        Order {
            id: "5".into(),
            deliver_to: "A".into(),
            mobile_number: "555".into(),
            status,
            dishes: vec![],
        }
    }

    #[test]
    fn accepts_a_complete_order() {
        let order = validate(body(order_body())).unwrap();

        assert_eq!(order.deliver_to, "A");
        assert_eq!(order.dishes.len(), 1);
        assert_eq!(order.dishes[0].quantity, 2);
        assert_eq!(order.dishes[0].details["name"], json!("Taco"));
        assert!(!order.dishes[0].details.contains_key("quantity"));
        assert_eq!(initial_status(&order), Ok(OrderStatus::Pending));
    }

    #[test]
    fn reports_missing_fields_in_order() {
        assert_eq!(
            validate(body(json!({ "mobileNumber": "555" }))),
            Err(ValidationError::MissingDeliverTo)
        );
        assert_eq!(
            validate(body(json!({ "deliverTo": "A", "mobileNumber": "" }))),
            Err(ValidationError::MissingMobileNumber)
        );
        assert_eq!(
            validate(body(json!({ "deliverTo": "A", "mobileNumber": "555" }))),
            Err(ValidationError::MissingDishes)
        );
    }

    #[test]
    fn null_dishes_count_as_missing() {
        let mut payload = order_body();
        payload["dishes"] = Value::Null;

        assert_eq!(
            validate(body(payload)),
            Err(ValidationError::MissingDishes)
        );
    }

    #[test]
    fn dish_entries_keep_whatever_fields_they_carry() {
        let mut payload = order_body();
        payload["dishes"] = json!([{ "id": 1, "quantity": 1, "note": ["no onions"] }]);

        let order = validate(body(payload)).unwrap();
        assert_eq!(order.dishes[0].quantity, 1);
        assert_eq!(order.dishes[0].details["id"], json!(1));
        assert_eq!(order.dishes[0].details["note"], json!(["no onions"]));
    }

    #[test]
    fn missing_delivery_address_wins_over_bad_dishes() {
        let payload = json!({ "mobileNumber": "555", "dishes": [] });

        assert_eq!(
            validate(body(payload)),
            Err(ValidationError::MissingDeliverTo)
        );
    }

    #[test]
    fn dishes_must_be_a_non_empty_list() {
        for dishes in [json!([]), json!("taco"), json!({ "quantity": 1 })] {
            let mut payload = order_body();
            payload["dishes"] = dishes;
            assert_eq!(
                validate(body(payload)),
                Err(ValidationError::EmptyDishes)
            );
        }
    }

    #[test]
    fn names_the_first_dish_with_a_bad_quantity() {
        let mut payload = order_body();
        payload["dishes"] = json!([
            { "id": "1", "quantity": 1 },
            { "id": "2", "quantity": 0 },
            { "id": "3" }
        ]);

        let err = validate(body(payload)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity(1));
        assert_eq!(
            err.to_string(),
            "Dish 1 must have a quantity that is an integer greater than 0"
        );
    }

    #[test]
    fn rejects_fractional_and_string_quantities() {
        for quantity in [json!(1.5), json!("2"), json!(-1), Value::Null] {
            let mut payload = order_body();
            payload["dishes"] = json!([{ "id": "1", "quantity": quantity }]);
            assert_eq!(
                validate(body(payload)),
                Err(ValidationError::InvalidQuantity(0))
            );
        }
    }

    #[test]
    fn initial_status_must_be_known_when_given() {
        let mut payload = order_body();
        payload["status"] = json!("preparing");
        let order = validate(body(payload)).unwrap();
        assert_eq!(initial_status(&order), Ok(OrderStatus::Preparing));

        let mut payload = order_body();
        payload["status"] = json!("lost");
        let order = validate(body(payload)).unwrap();
        assert_eq!(initial_status(&order), Err(ValidationError::InvalidStatus));
    }

    #[test]
    fn delivered_orders_reject_every_status() {
        let mut payload = order_body();
        payload["status"] = json!("pending");
        let order = validate(body(payload)).unwrap();

        assert_eq!(
            validate_status(&stored(OrderStatus::Delivered), &order),
            Err(ValidationError::DeliveredOrderImmutable)
        );
        assert_eq!(
            validate_status(&stored(OrderStatus::OutForDelivery), &order),
            Ok(OrderStatus::Pending)
        );
    }

    #[test]
    fn update_requires_a_known_status() {
        let order = validate(body(order_body())).unwrap();
        assert_eq!(
            validate_status(&stored(OrderStatus::Pending), &order),
            Err(ValidationError::InvalidStatus)
        );

        let mut payload = order_body();
        payload["status"] = json!("out-for-deliver");
        let order = validate(body(payload)).unwrap();
        assert_eq!(
            validate_status(&stored(OrderStatus::Pending), &order),
            Err(ValidationError::InvalidStatus)
        );
    }

    #[test]
    fn only_pending_orders_can_be_deleted() {
        assert!(validate_pending(&stored(OrderStatus::Pending)).is_ok());
        for status in [
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ] {
            assert_eq!(
                validate_pending(&stored(status)),
                Err(ValidationError::OrderNotPending)
            );
        }
    }

    #[test]
    fn non_object_entries_have_no_quantity() {
        let mut payload = order_body();
        payload["dishes"] = json!([{ "quantity": 2 }, 7]);

        assert_eq!(
            validate(body(payload)),
            Err(ValidationError::InvalidQuantity(1))
        );
    }

    #[test]
    fn shape_errors_become_malformed_body() {
        let err = parse(Envelope(json!({ "data": { "deliverTo": 5 } }))).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedBody(_)));

        assert_eq!(
            parse(Envelope(json!({ "foo": 1 }))),
            Err(ValidationError::MalformedBody(
                "Request body must include a data object".to_string()
            ))
        );
    }

    #[test]
    fn body_id_must_match_route() {
        let mut payload = order_body();
        payload["id"] = json!("99");
        let order = validate(body(payload)).unwrap();

        assert_eq!(
            validate_id(&order, "5").unwrap_err().to_string(),
            "Order id does not match route id. Order: 99, Route: 5"
        );
    }
}
