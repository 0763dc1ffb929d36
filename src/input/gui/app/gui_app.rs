use crate::controllers::interactive::ZoomController;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::zoom_input::ZoomInputState;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

const CONTROLS_HELP: &[(&str, &str)] = &[
    ("Left click", "aim"),
    ("Right click", "reverse zoom"),
    ("Space", "pause / resume"),
    ("Z", "pause depth"),
    ("X", "pause x axis"),
    ("C or Y", "pause y axis"),
];

pub struct GuiApp<P: GuiPresenterPort> {
    pub controller: ZoomController<P>,
    input: ZoomInputState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        controller: ZoomController<P>,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            controller,
            input: ZoomInputState::default(),
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.controller
            .presenter_mut()
            .render(egui_output, &self.egui_ctx)
    }

    /// Forwards to egui first. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let pixel = self
            .controller
            .presenter_mut()
            .window_pos_to_pixel((position.x as f32, position.y as f32));
        self.input.handle_cursor_moved(pixel);
    }

    pub fn handle_cursor_left(&mut self) {
        self.input.handle_cursor_left();
    }

    pub fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if let Some(command) = self.input.handle_mouse_button(button, state) {
            self.controller.handle(command);
        }
    }

    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let Some(command) = self
            .input
            .handle_key_event(&event.logical_key, event.state, event.repeat)
        {
            self.controller.handle(command);
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let state = self.controller.state();
        let last_frame = self.controller.last_frame();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Zoom Status")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 260.0])
                .show(ctx, |ui| {
                    ui.heading(format!("Preset: {}", state.preset.display_name()));
                    ui.separator();

                    ui.label(format!("Aim: ({:.16}, {:.16})", state.aim.re, state.aim.im));
                    ui.label(format!(
                        "Real: [{:.6e}, {:.6e}]",
                        state.window.min_x(),
                        state.window.max_x()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6e}, {:.6e}]",
                        state.window.min_y(),
                        state.window.max_y()
                    ));
                    ui.label(format!("Zoom offset: {:.4}", state.depth.zoom_offset));
                    ui.label(format!("Iteration cap: {}", state.effective_cap()));

                    ui.separator();
                    let flags = state.flags;
                    ui.label(format!(
                        "Paused: {}  Reverse: {}",
                        flags.paused, flags.reverse_zoom
                    ));
                    ui.label(format!(
                        "Hold x: {}  y: {}  depth: {}",
                        flags.x_axis_paused, flags.y_axis_paused, flags.depth_paused
                    ));

                    if let Some(frame) = last_frame {
                        ui.label(format!(
                            "Frame {}: {} ms",
                            frame.frame_number,
                            frame.render_duration.as_millis()
                        ));
                        if let Some(warning) = frame.update.warning {
                            ui.colored_label(egui::Color32::LIGHT_RED, format!("{warning:?}"));
                        }
                    }

                    ui.separator();
                    egui::Grid::new("controls_help").show(ui, |ui| {
                        for (input, action) in CONTROLS_HELP {
                            ui.label(*input);
                            ui.label(*action);
                            ui.end_row();
                        }
                    });
                });
        })
    }
}
