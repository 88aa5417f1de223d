//! Core validation types and traits
//!
//! - **Values**: [`InputValue`], [`DateRange`], [`DateBound`]
//! - **Traits**: [`Check`], plus [`InlineRule`] for caller predicates
//! - **Errors**: [`Error`] and the crate [`Result`] alias

pub mod error;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use traits::{Check, InlineRule};
pub use value::{DateBound, DateRange, InputValue};
