mod error;
pub use error::Error;

pub mod name;
pub use name::Name;

pub mod str;

pub mod prelude {
    pub use crate::{str::StrUtil, Name};
}

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
