pub mod error;
pub mod coerce;
pub mod path;

pub use error::{Error, Result};
pub use coerce::{coerce_number, text_equal};
pub use path::resolve;
