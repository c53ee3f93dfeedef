//! Data models for the community board application.
//!
//! Field names and enum spellings match the JSON blobs the original frontend
//! stored, so existing serialized collections remain readable.

mod announcement;
mod contact;
mod event;
mod posting;
mod user;

pub use announcement::*;
pub use contact::*;
pub use event::*;
pub use posting::*;
pub use user::*;
