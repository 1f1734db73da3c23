use diesel::prelude::*;

use crate::schema::{pizzas, restaurant_pizzas, restaurants};

pub const PRICE_MIN: i32 = 1;
pub const PRICE_MAX: i32 = 30;

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = pizzas)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = pizzas)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, PartialEq)]
#[diesel(belongs_to(Restaurant))]
#[diesel(belongs_to(Pizza))]
#[diesel(table_name = restaurant_pizzas)]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("price must be between ${PRICE_MIN} and ${PRICE_MAX}")]
pub struct PriceOutOfRange;

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = restaurant_pizzas)]
pub struct NewRestaurantPizza {
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

impl NewRestaurantPizza {
    /// Constructs the join row, rejecting out-of-range prices up front.
    /// The `check_price_range` constraint re-checks the bound at the
    /// storage layer.
    pub fn new(price: i32, restaurant_id: i32, pizza_id: i32) -> Result<Self, PriceOutOfRange> {
        if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
            return Err(PriceOutOfRange);
        }
        Ok(Self {
            price,
            restaurant_id,
            pizza_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prices_within_bounds() {
        for price in [PRICE_MIN, 12, PRICE_MAX] {
            let rp = NewRestaurantPizza::new(price, 1, 1).unwrap();
            assert_eq!(rp.price, price);
        }
    }

    #[test]
    fn rejects_prices_outside_bounds() {
        for price in [0, -5, 31, 100] {
            assert_eq!(NewRestaurantPizza::new(price, 1, 1), Err(PriceOutOfRange));
        }
    }
}
