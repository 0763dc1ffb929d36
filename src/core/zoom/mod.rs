pub mod commands;
pub mod config;
pub mod flags;
pub mod state;
pub mod status;
pub mod transform;

pub use commands::ZoomCommand;
pub use config::{ConfigError, ZoomConfig, ZoomFactors, ZoomPreset};
pub use flags::AnimationFlags;
pub use state::ZoomState;
pub use status::{ZoomUpdateReport, ZoomWarning};
