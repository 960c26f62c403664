//! Client-side state stores.
//!
//! Each store owns one slice of UI state and accepts responses only through
//! ticketed entry points, so late responses are dropped instead of
//! overwriting newer state.

mod detail;
mod list;
mod sequence;

pub use detail::{DRAFT_ERROR_PLACEHOLDER, DraftRequest, ThreadDetailStore};
pub use list::{CategoryListStore, SearchCommit};
pub use sequence::{RequestSequence, Ticket};
