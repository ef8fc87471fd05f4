//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod decoder;
pub mod display;

pub use button::button_task;
pub use decoder::decoder_task;
pub use display::display_task;
