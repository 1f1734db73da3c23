use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use diesel::prelude::*;
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models;
use crate::schema::{pizzas, restaurants};
use crate::views;

use super::AppState;

// Pizzas intentionally have no delete route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pizzas", get(list_pizzas).post(create_pizza))
        .route("/pizzas/{id}", get(get_pizza))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePizzaRequest {
    /// Name of the pizza
    pub name: Option<String>,
    /// Comma-separated ingredient list
    pub ingredients: Option<String>,
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [views::PizzaSummary]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<views::PizzaSummary>>, ApiError> {
    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    let rows = pizzas::table
        .select(models::Pizza::as_select())
        .load(conn)?;

    Ok(Json(rows.into_iter().map(views::pizza_summary).collect()))
}

#[utoipa::path(
    get,
    path = "/pizzas/{id}",
    responses(
        (status = 200, description = "Pizza with its associations", body = views::PizzaDetail),
        (status = 404, description = "Pizza not found", body = crate::error::ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Pizza id")
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn get_pizza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<views::PizzaDetail>, ApiError> {
    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    let pizza = pizzas::table
        .find(id)
        .select(models::Pizza::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("Pizza"))?;

    let restaurant_pizzas = models::RestaurantPizza::belonging_to(&pizza)
        .inner_join(restaurants::table)
        .select((
            models::RestaurantPizza::as_select(),
            models::Restaurant::as_select(),
        ))
        .load::<(models::RestaurantPizza, models::Restaurant)>(conn)?;

    Ok(Json(views::pizza_detail(pizza, restaurant_pizzas)))
}

#[utoipa::path(
    post,
    path = "/pizzas",
    request_body = CreatePizzaRequest,
    responses(
        (status = 201, description = "Pizza created", body = views::PizzaSummary),
        (status = 400, description = "Missing required fields", body = crate::error::ValidationErrorResponse),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn create_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreatePizzaRequest>,
) -> Result<(StatusCode, Json<views::PizzaSummary>), ApiError> {
    let name = payload
        .name
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::ValidationFailed)?;
    let ingredients = payload
        .ingredients
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::ValidationFailed)?;

    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    let pizza = diesel::insert_into(pizzas::table)
        .values(models::NewPizza { name, ingredients })
        .returning(models::Pizza::as_returning())
        .get_result(conn)?;

    Ok((StatusCode::CREATED, Json(views::pizza_summary(pizza))))
}
