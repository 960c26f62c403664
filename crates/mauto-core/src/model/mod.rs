//! Domain models shared by the stores and the API client.

pub mod decode;
mod email;
mod thread;

pub use email::{Category, Email, EmailId, Recipients, Timestamp};
pub use thread::{Attachment, AttachmentId, EmailDetail, ThreadMessage};
