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

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantRequest {
    /// Name of the restaurant
    pub name: Option<String>,
    /// Street address of the restaurant
    pub address: Option<String>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = [views::RestaurantSummary]),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<views::RestaurantSummary>>, ApiError> {
    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    let rows = restaurants::table
        .select(models::Restaurant::as_select())
        .load(conn)?;

    Ok(Json(
        rows.into_iter().map(views::restaurant_summary).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with its associations", body = views::RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = crate::error::ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<views::RestaurantDetail>, ApiError> {
    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    let restaurant = restaurants::table
        .find(id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("Restaurant"))?;

    let restaurant_pizzas = models::RestaurantPizza::belonging_to(&restaurant)
        .inner_join(pizzas::table)
        .select((
            models::RestaurantPizza::as_select(),
            models::Pizza::as_select(),
        ))
        .load::<(models::RestaurantPizza, models::Pizza)>(conn)?;

    Ok(Json(views::restaurant_detail(restaurant, restaurant_pizzas)))
}

#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = views::RestaurantSummary),
        (status = 400, description = "Missing required fields", body = crate::error::ValidationErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<views::RestaurantSummary>), ApiError> {
    let name = payload
        .name
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::ValidationFailed)?;
    let address = payload
        .address
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::ValidationFailed)?;

    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    let restaurant = diesel::insert_into(restaurants::table)
        .values(models::NewRestaurant { name, address })
        .returning(models::Restaurant::as_returning())
        .get_result(conn)?;

    Ok((
        StatusCode::CREATED,
        Json(views::restaurant_summary(restaurant)),
    ))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its associations deleted"),
        (status = 404, description = "Restaurant not found", body = crate::error::ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut guard = state.conn.lock().await;
    let conn = &mut *guard;

    // restaurant_pizzas rows follow via ON DELETE CASCADE.
    let deleted = diesel::delete(restaurants::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Restaurant"));
    }

    Ok(StatusCode::NO_CONTENT)
}
