pub mod models;
mod validation;

pub use models::*;
