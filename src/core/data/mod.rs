pub mod colour;
pub mod complex;
pub mod depth;
pub mod double_buffer;
pub mod frame_buffer;
pub mod raster;
pub mod view_window;
