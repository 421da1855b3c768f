use crate::utils::{
    id::next_id,
    store::{self, Record, Store},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Delivered orders can no longer be changed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        };

        write!(f, "{}", status)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// One line of an order. Whatever the client sent next to `quantity` is
/// kept as-is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderDish {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub async fn find_many(store: &dyn Store<Order>) -> Result<Vec<Order>, store::Error> {
    store.list().await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many orders: {}", err);
        err
    })
}

pub async fn find_by_id(store: &dyn Store<Order>, id: String) -> Result<Option<Order>, store::Error> {
    store.get(&id).await.map_err(|err| {
        tracing::error!("Error occurred while fetching order with id {}: {}", id, err);
        err
    })
}

pub async fn create(
    store: &dyn Store<Order>,
    payload: CreateOrderPayload,
) -> Result<Order, store::Error> {
    let order = Order {
        id: next_id(),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: payload.status,
        dishes: payload.dishes,
    };

    store.put(order).await.map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        err
    })
}

pub async fn update_by_id(
    store: &dyn Store<Order>,
    id: String,
    payload: UpdateOrderPayload,
) -> Result<Order, store::Error> {
    let order = Order {
        id,
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: payload.status,
        dishes: payload.dishes,
    };

    store.put(order).await.map_err(|err| {
        tracing::error!("Error occurred while trying to update order: {}", err);
        err
    })
}

pub async fn delete_by_id(
    store: &dyn Store<Order>,
    id: String,
) -> Result<Option<Order>, store::Error> {
    store.delete(&id).await.map_err(|err| {
        tracing::error!("Error occurred while trying to delete order {}: {}", id, err);
        err
    })
}
