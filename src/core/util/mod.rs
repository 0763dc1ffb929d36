pub mod pixel_coords;
