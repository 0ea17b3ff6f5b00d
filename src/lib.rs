//! Workout logbook: sets notation, table and chart views over logged
//! workouts, the exercise catalog, and the SQLite store behind them.

pub mod catalog;
pub mod charts;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod sets;
pub mod stats;
pub mod version;
