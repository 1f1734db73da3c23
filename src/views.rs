//! JSON response shapes.
//!
//! Relationship traversal is one hop deep by construction: a restaurant
//! detail nests its join rows with the pizza side only, a pizza detail nests
//! the restaurant side only, and a join-row detail nests both ends as flat
//! records. The entity that initiated the fetch never reappears through a
//! child's back-reference, so mutual nesting cannot recurse.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models;

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

/// Join row as seen from a restaurant: pizza side nested, restaurant side
/// suppressed.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaWithPizza {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaSummary,
}

/// Join row as seen from a pizza: restaurant side nested, pizza side
/// suppressed.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaWithRestaurant {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaDetail {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithRestaurant>,
}

/// Join row as returned from its own creation: both ends nested, neither
/// end re-including its join rows.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaDetail {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantSummary,
    pub pizza: PizzaSummary,
}

pub fn restaurant_summary(restaurant: models::Restaurant) -> RestaurantSummary {
    RestaurantSummary {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
    }
}

pub fn pizza_summary(pizza: models::Pizza) -> PizzaSummary {
    PizzaSummary {
        id: pizza.id,
        name: pizza.name,
        ingredients: pizza.ingredients,
    }
}

pub fn restaurant_detail(
    restaurant: models::Restaurant,
    restaurant_pizzas: Vec<(models::RestaurantPizza, models::Pizza)>,
) -> RestaurantDetail {
    RestaurantDetail {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas: restaurant_pizzas
            .into_iter()
            .map(|(rp, pizza)| RestaurantPizzaWithPizza {
                id: rp.id,
                price: rp.price,
                restaurant_id: rp.restaurant_id,
                pizza_id: rp.pizza_id,
                pizza: pizza_summary(pizza),
            })
            .collect(),
    }
}

pub fn pizza_detail(
    pizza: models::Pizza,
    restaurant_pizzas: Vec<(models::RestaurantPizza, models::Restaurant)>,
) -> PizzaDetail {
    PizzaDetail {
        id: pizza.id,
        name: pizza.name,
        ingredients: pizza.ingredients,
        restaurant_pizzas: restaurant_pizzas
            .into_iter()
            .map(|(rp, restaurant)| RestaurantPizzaWithRestaurant {
                id: rp.id,
                price: rp.price,
                restaurant_id: rp.restaurant_id,
                pizza_id: rp.pizza_id,
                restaurant: restaurant_summary(restaurant),
            })
            .collect(),
    }
}

pub fn restaurant_pizza_detail(
    restaurant_pizza: models::RestaurantPizza,
    restaurant: models::Restaurant,
    pizza: models::Pizza,
) -> RestaurantPizzaDetail {
    RestaurantPizzaDetail {
        id: restaurant_pizza.id,
        price: restaurant_pizza.price,
        restaurant_id: restaurant_pizza.restaurant_id,
        pizza_id: restaurant_pizza.pizza_id,
        restaurant: restaurant_summary(restaurant),
        pizza: pizza_summary(pizza),
    }
}
