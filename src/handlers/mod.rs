pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-export routers for easier importing
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use std::sync::Arc;

use axum::response::Html;
use diesel::SqliteConnection;
use tokio::sync::Mutex;
use utoipa::OpenApi;

use crate::error::{ApiErrorResponse, ValidationErrorResponse};
use crate::views;

#[derive(Clone)]
pub struct AppState {
    pub conn: Arc<Mutex<SqliteConnection>>,
}

impl AppState {
    pub fn new(conn: SqliteConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::create_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        pizza::get_pizza,
        pizza::create_pizza,
        restaurant_pizza::create_restaurant_pizza,
        restaurant_pizza::delete_restaurant_pizza,
    ),
    components(schemas(
        restaurant::CreateRestaurantRequest,
        pizza::CreatePizzaRequest,
        restaurant_pizza::CreateRestaurantPizzaRequest,
        restaurant_pizza::DeleteRestaurantPizzaResponse,
        views::RestaurantSummary,
        views::RestaurantDetail,
        views::PizzaSummary,
        views::PizzaDetail,
        views::RestaurantPizzaWithPizza,
        views::RestaurantPizzaWithRestaurant,
        views::RestaurantPizzaDetail,
        ApiErrorResponse,
        ValidationErrorResponse,
    )),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Restaurant-pizza association endpoints")
    ),
    info(
        title = "Pizzeria API",
        description = "CRUD API over restaurants, pizzas, and their priced associations",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
