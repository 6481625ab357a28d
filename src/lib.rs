// Crate root library declaration and module exports.
pub mod calendar;
pub mod client;
pub mod config;
pub mod context;
pub mod controller;
pub mod markup;
pub mod model;
pub mod page;
pub mod schema;
pub mod status;
pub mod surface;
pub mod teachers;
