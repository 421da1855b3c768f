use crate::utils::{
    id::next_id,
    store::{self, Record, Store},
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub struct UpdateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub async fn find_many(store: &dyn Store<Dish>) -> Result<Vec<Dish>, store::Error> {
    store.list().await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many dishes: {}", err);
        err
    })
}

pub async fn find_by_id(store: &dyn Store<Dish>, id: String) -> Result<Option<Dish>, store::Error> {
    store.get(&id).await.map_err(|err| {
        tracing::error!("Error occurred while fetching dish with id {}: {}", id, err);
        err
    })
}

pub async fn create(store: &dyn Store<Dish>, payload: CreateDishPayload) -> Result<Dish, store::Error> {
    let dish = Dish {
        id: next_id(),
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    store.put(dish).await.map_err(|err| {
        tracing::error!("Error occurred while trying to create a dish: {}", err);
        err
    })
}

pub async fn update_by_id(
    store: &dyn Store<Dish>,
    id: String,
    payload: UpdateDishPayload,
) -> Result<Dish, store::Error> {
    let dish = Dish {
        id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    store.put(dish).await.map_err(|err| {
        tracing::error!("Error occurred while trying to update dish: {}", err);
        err
    })
}
