pub mod error;
pub mod sanitize;
pub mod tree;
pub mod types;

pub use error::{Error, Result};
