//! Map tooltip module
//!
//! Producers write the message they want shown into a [`TooltipStore`]. Once
//! per frame [`TooltipContext::update_visibility`] decides whether the overlay
//! window is open and where, and the overlay's draw pass hands the message to
//! a [`TextRenderer`].

mod tooltip_content;
pub mod tooltip_render;
mod tooltip_state;
pub mod tooltip_visibility;

pub use tooltip_content::{FormatArg, STR_MAP_TOOLTIP_STRINGID, STR_NONE, StringId, TooltipPayload, TooltipStore};
pub use tooltip_render::{TextAlignment, TextRenderer, draw_tooltip};
pub use tooltip_state::{HOLD_THRESHOLD, MOTION_THRESHOLD, PointerSample, TooltipContext};
pub use tooltip_visibility::VisibilityChange;
