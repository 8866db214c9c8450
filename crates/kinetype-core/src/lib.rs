pub mod burst;
pub mod config;
pub mod coordinator;
pub mod easing;
pub mod error;
pub mod hero;
pub mod host;
pub mod sampler;
pub mod scene;
pub mod style;
pub mod timeline;
pub mod typewriter;

pub use config::{AppConfig, ScrollConfig};
pub use coordinator::{FrameState, RenderCoordinator, Signal};
pub use easing::EasingType;
pub use error::{Error, Result};
pub use host::{FixedAdvanceMeasure, FrameScheduler, PresentationSink, ProgressSource, TextMeasure};
pub use sampler::{RegionBox, Viewport};
pub use scene::{FrameInputs, Scene, SceneFrame};
