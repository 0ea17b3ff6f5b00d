pub mod catalog;
pub mod graphs;
pub mod health;
pub mod settings;
pub mod stats;
pub mod workouts;
