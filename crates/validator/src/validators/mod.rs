//! Built-in rules
//!
//! One type per registered rule; [`Rule`](crate::rules::Rule) dispatches
//! to them by name.
//!
//! - **Presence**: [`Required`]
//! - **Comparison**: [`Max`], [`Min`], [`Equals`]
//! - **Content**: [`Email`], [`MatchesPattern`], [`PersonName`]
//! - **Character class**: [`Alpha`], [`AlphaNumeric`], [`Numeric`]

pub mod comparison;
pub mod content;
pub mod pattern;
pub mod presence;

pub use comparison::{Equals, Limit, Max, Min, equals, max, min};
pub use content::{Email, MatchesPattern, PersonName, email, matches_pattern, person_name};
pub use pattern::{Alpha, AlphaNumeric, Numeric, alpha, alpha_numeric, numeric};
pub use presence::{Required, required};
