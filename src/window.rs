//! Window registry
//!
//! Host-owned windows keyed by a closed set of classes. The tooltip core only
//! ever talks to windows through [`WindowRegistry`]; the in-memory
//! [`WindowManager`] is the registry the terminal host uses.

mod window_manager;
mod window_registry;

pub use window_manager::WindowManager;
pub use window_registry::{Window, WindowClass, WindowFlags, WindowRegistry};
