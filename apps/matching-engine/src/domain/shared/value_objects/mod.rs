//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod place;
mod resolved;
mod time_window;

pub use identifiers::{DotNumber, MatchId, PostingId};
pub use place::Place;
pub use resolved::Resolved;
pub use time_window::TimeWindow;
