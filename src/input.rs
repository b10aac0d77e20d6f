//! Pointer and modifier input
//!
//! [`InputSource`] is what the tooltip controller reads each frame.
//! [`InputState`] is the host's implementation, fed from terminal mouse events.

mod input_state;
pub mod mouse_input;

pub use input_state::{InputFlags, InputSource, InputState, InteractionMode, PlaceObjectModifier};
