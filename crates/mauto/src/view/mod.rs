//! View components for the application.

mod attachments;
mod email_list;
mod nav;
mod pane_divider;
mod thread;

pub use attachments::{view_attachment_sidebar, view_preview};
pub use email_list::view_email_list;
pub use nav::view_nav;
pub use pane_divider::view_pane_divider;
pub use thread::view_thread;
