pub mod config;
pub mod error;
pub mod locale;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod slug;
pub mod state;
pub mod store;
