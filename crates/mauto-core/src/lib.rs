//! # mauto-core
//!
//! Headless core of the Mauto inbox triage client.
//!
//! This crate provides:
//! - Domain models and total decoding of the triage API payloads
//! - An HTTP client for the triage API behind the [`MailApi`] seam
//! - Category list and thread detail stores with stale-response discard
//! - The [`ActionOrchestrator`], which issues requests and applies results
//! - Pointer-driven panel layout and the attachment preview panel

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
mod error;
pub mod layout;
pub mod model;
pub mod orchestrator;
pub mod preview;
pub mod store;

pub use api::{HttpMailApi, MailApi, attachment_url};
pub use config::{ClientConfig, LayoutConfig};
pub use error::{ApiError, ApiResult, Error, Result};
pub use layout::{CursorStyle, DragError, DragTracker, PanelEdge, PanelLayoutController};
pub use model::{Attachment, AttachmentId, Category, Email, EmailDetail, EmailId, ThreadMessage};
pub use orchestrator::{ActionOrchestrator, Outcome, Request};
pub use preview::{ActivePreview, AttachmentPreviewController, PreviewKind};
pub use store::{CategoryListStore, ThreadDetailStore, Ticket};
