use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::raster::Pixel;
use egui::Context as EguiContext;

pub trait GuiPresenterPort: FramePresenterPort {
    /// Draws the last presented frame with the egui overlay on top.
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    /// Raster cell under a physical window position, clamped onto the raster.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Pixel;
}
