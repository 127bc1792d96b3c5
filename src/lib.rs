//! An explicit present-or-absent container.
//!
//! [`Option<T>`] models exactly one dimension, presence, and keeps it intact
//! through two interoperability layers:
//!
//! - serde, where absent is the format's null and present is the bare inner
//!   value (see [`IsAbsent`] and, with the `macros` feature, [`omit_absent`]
//!   for omitting absent fields from aggregates);
//! - storage drivers, through the [`ToParameter`] and [`Scan`] seams over the
//!   dynamically typed [`Value`].
//!
//! ```
//! use optional_value::Option;
//!
//! let mut port = Option::from_pair(8080, true);
//! port.transform(|p| p + 1);
//! assert_eq!(port.describe(), "Some(8081)");
//! assert_eq!(Option::<u16>::absent().get_or_default(80), 80);
//! ```

#![warn(rust_2018_idioms)]

mod document;
mod error;
mod option;
pub mod storage;

pub use document::IsAbsent;
pub use error::{Error, Result};
pub use option::{Absent, Option, Present};
pub use storage::{Scan, ToParameter, Value};

#[cfg(feature = "macros")]
pub use optional_value_macro::omit_absent;
