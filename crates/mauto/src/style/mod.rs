//! Widget styles.

mod buttons;
mod containers;
mod inputs;
pub mod palette;

pub use buttons::{
    category_button_selected_style, category_button_style, email_button_selected_style,
    email_button_style, ghost_button_style, primary_button_style, secondary_button_style,
};
pub use containers::{
    avatar_style, badge_style, card_style, divider_style, draft_panel_style, header_style,
    list_style, message_body_style, nav_style, sidebar_style, thread_style,
};
pub use inputs::{scrollable_style, search_input_style};

/// Rounded corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 12.0;
    pub const PILL: f32 = 9999.0;
}
