pub mod app;
pub mod event;
pub mod host;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use host::{CellMeasure, FrameRequests, FrameStore};
pub use theme::Theme;
