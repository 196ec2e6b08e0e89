//! Workout API: users and exercises over HTTP, backed by SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod version;

#[cfg(test)]
pub(crate) mod test_utils;
