pub mod catalog;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod models;
pub mod services;

pub use catalog::*;
pub use config::*;
pub use errors::*;
pub use models::*;
pub use services::*;
