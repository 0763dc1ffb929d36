pub mod controller;
pub mod data;
pub mod ports;

pub use controller::ZoomController;
