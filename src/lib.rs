use axum::{routing::get, Router};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use dotenvy::dotenv;
use std::env;

pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod views;

pub use handlers::AppState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn establish_connection() -> SqliteConnection {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "app.db".to_string());
    let mut conn = SqliteConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {database_url}"));

    // SQLite leaves foreign key enforcement off per connection; cascading
    // deletes depend on it.
    conn.batch_execute("PRAGMA foreign_keys = ON")
        .expect("Failed to enable foreign keys");

    conn
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .merge(handlers::restaurant_router())
        .merge(handlers::pizza_router())
        .merge(handlers::restaurant_pizza_router())
}
