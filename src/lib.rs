#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::interactive::ZoomController;
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::ports::presenter::FramePresenterPort;
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::depth::DepthState;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::raster::{Pixel, RasterError, RasterSpec};
pub use crate::core::data::view_window::{ViewWindow, ViewWindowError};
pub use crate::core::zoom::{
    AnimationFlags, ConfigError, ZoomCommand, ZoomConfig, ZoomFactors, ZoomPreset, ZoomState,
    ZoomUpdateReport, ZoomWarning,
};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
