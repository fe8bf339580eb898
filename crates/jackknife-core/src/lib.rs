pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Registry;

pub mod stmt;

/// A Result type alias that uses Jackknife's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
