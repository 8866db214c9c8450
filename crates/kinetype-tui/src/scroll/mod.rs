//! Smooth page scrolling for the preview.
//!
//! Scroll positions are virtual pixels. Key presses add to a pending delta
//! that is folded into one eased animation on the next update, so a burst of
//! presses produces a single glide instead of a queue of small ones.
//!
//! ```ignore
//! use kinetype_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//! animator.scroll_by(48.0, max_scroll);
//!
//! // In the main loop
//! let position = animator.update(max_scroll);
//! ```

pub mod animation;
pub mod config;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
