use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models;
use crate::schema::{pizzas, restaurant_pizzas, restaurants};
use crate::views;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurant_pizzas", post(create_restaurant_pizza))
        .route("/restaurant_pizzas/{id}", delete(delete_restaurant_pizza))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price in whole dollars, 1 to 30
    pub price: Option<i32>,
    /// Id of an existing restaurant
    pub restaurant_id: Option<i32>,
    /// Id of an existing pizza
    pub pizza_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteRestaurantPizzaResponse {
    /// Confirmation message
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Association created", body = views::RestaurantPizzaDetail),
        (status = 400, description = "Validation failed", body = crate::error::ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<views::RestaurantPizzaDetail>), ApiError> {
    let price = payload.price.ok_or(ApiError::ValidationFailed)?;
    let restaurant_id = payload.restaurant_id.ok_or(ApiError::ValidationFailed)?;
    let pizza_id = payload.pizza_id.ok_or(ApiError::ValidationFailed)?;

    let new_restaurant_pizza = models::NewRestaurantPizza::new(price, restaurant_id, pizza_id)
        .map_err(|_| ApiError::ValidationFailed)?;

    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    // Unknown foreign keys and the storage-level price check surface here;
    // the whole write rolls back and the client sees the opaque payload.
    let (restaurant_pizza, restaurant, pizza) = conn
        .transaction::<_, diesel::result::Error, _>(|conn| {
            let restaurant_pizza = diesel::insert_into(restaurant_pizzas::table)
                .values(&new_restaurant_pizza)
                .returning(models::RestaurantPizza::as_returning())
                .get_result(conn)?;

            let restaurant = restaurants::table
                .find(restaurant_pizza.restaurant_id)
                .select(models::Restaurant::as_select())
                .first(conn)?;
            let pizza = pizzas::table
                .find(restaurant_pizza.pizza_id)
                .select(models::Pizza::as_select())
                .first(conn)?;

            Ok((restaurant_pizza, restaurant, pizza))
        })
        .map_err(|_| ApiError::ValidationFailed)?;

    Ok((
        StatusCode::CREATED,
        Json(views::restaurant_pizza_detail(
            restaurant_pizza,
            restaurant,
            pizza,
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/restaurant_pizzas/{id}",
    responses(
        (status = 200, description = "Association deleted", body = DeleteRestaurantPizzaResponse),
        (status = 404, description = "Association not found", body = crate::error::ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Association id")
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant_pizza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteRestaurantPizzaResponse>, ApiError> {
    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    let deleted = diesel::delete(restaurant_pizzas::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("RestaurantPizza"));
    }

    Ok(Json(DeleteRestaurantPizzaResponse {
        message: "RestaurantPizza deleted successfully".to_string(),
    }))
}
