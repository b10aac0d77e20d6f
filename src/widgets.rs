pub mod popup;
pub mod wrapped_text;
