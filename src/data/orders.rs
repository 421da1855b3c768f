use crate::modules::order::repository::{Order, OrderDish, OrderStatus};
use serde_json::{Map, Value};

fn line(id: &str, name: &str, price: u64, quantity: u64) -> OrderDish {
    let mut details = Map::new();
    details.insert("id".to_string(), Value::from(id));
    details.insert("name".to_string(), Value::from(name));
    details.insert("price".to_string(), Value::from(price));

    OrderDish { quantity, details }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "f6069a542257054114138301947672ba".to_string(),
            deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".to_string(),
            mobile_number: "(202) 456-1111".to_string(),
            status: OrderStatus::OutForDelivery,
            dishes: vec![line(
                "90c3d873684bf381dfab29034b5bba73",
                "Falafel and tahini bagel",
                6,
                1,
            )],
        },
        Order {
            id: "5a887d326e83d3c5bdcbee398ea32aff".to_string(),
            deliver_to: "308 Negra Arroyo Lane, Albuquerque, NM".to_string(),
            mobile_number: "(505) 143-3369".to_string(),
            status: OrderStatus::Delivered,
            dishes: vec![line(
                "d351db2b49b69679504652ea1cf38241",
                "Dolcelatte and chickpea spaghetti",
                19,
                2,
            )],
        },
        Order {
            id: "2a3fb3a5a0be2cfa3c27b08c6fd44d90".to_string(),
            deliver_to: "221B Baker Street, London".to_string(),
            mobile_number: "(020) 7224-3688".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![
                line(
                    "3c637d011d844ebab1205fef8a7e36ea",
                    "Century Eggs",
                    17,
                    1,
                ),
                line(
                    "f8165a2df5e5d8b0f9bd2bd3b3aa6ad5",
                    "Spinach and cheese burrito",
                    11,
                    3,
                ),
            ],
        },
    ]
}
