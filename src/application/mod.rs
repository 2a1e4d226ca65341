//! Application layer: loading input and building stores
//!
//! This layer connects I/O (files, stdin, JSON) to the domain layer.

pub mod error;
pub mod error_ext;
pub mod loader;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::{load_items, load_store, parse_items, InputSource};
