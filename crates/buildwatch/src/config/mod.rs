pub mod interpolation;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigLoader;
pub use schema::{
    BuildwatchConfig,
    ServiceConfig,
};
