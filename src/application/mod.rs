//! Application layer: loader services around the domain core

pub mod error;
pub mod loader;

pub use error::{ApplicationError, ApplicationResult};
pub use loader::{load_catalog, load_records};
