pub mod config;
pub mod engine;
pub mod error;
pub mod middleware;
pub mod models;
pub mod oracle;
pub mod providers;
pub mod routes;
