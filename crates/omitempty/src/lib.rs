#![doc = include_str!("../README.md")]

pub mod error;
pub mod number;
pub mod options;
pub mod prune;
pub mod value;

#[cfg(feature = "serde")]
pub mod de;
#[cfg(feature = "serde")]
pub mod ser;
#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, Result};
pub use crate::options::{Options, SequenceCheck};
pub use crate::prune::{is_empty, prune, try_prune};
pub use crate::value::{Fields, Number, Record, Value};

#[cfg(feature = "serde")]
pub use crate::prune::prune_serialize;
#[cfg(feature = "serde")]
pub use crate::ser::to_value;
#[cfg(feature = "json")]
pub use crate::json::prune_json;
