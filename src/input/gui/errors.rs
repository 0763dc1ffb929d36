use crate::core::zoom::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("invalid zoom configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
}
