use crate::controllers::interactive::ZoomController;
use crate::core::zoom::config::ZoomConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use log::{error, info};
use std::marker::PhantomData;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ZoomConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ZoomConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;

        let event_loop = EventLoop::new()?;
        let raster = self.config.raster;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(format!("Mandelbrot Zoom ({})", self.config.preset.display_name()))
                .with_inner_size(LogicalSize::new(raster.width(), raster.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window, raster)?;
        let controller = ZoomController::new(&self.config, presenter)?;
        let mut app = GuiApp::new(window, &event_loop, controller);

        event_loop.run(|event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let (egui_consumed, _) = app.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            info!("window closed");
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            app.controller.tick();

                            let egui_output = app.update_ui(window);
                            let platform_output = egui_output.platform_output.clone();
                            app.egui_state.handle_platform_output(window, platform_output);

                            if let Err(e) = app.render(egui_output) {
                                error!("render error: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            if let Err(e) = app
                                .controller
                                .presenter_mut()
                                .resize_surface(size.width, size.height)
                            {
                                error!("surface resize failed: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            app.handle_cursor_moved(*position);
                        }
                        WindowEvent::CursorLeft { .. } => {
                            app.handle_cursor_left();
                        }
                        WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                            app.handle_mouse_input(*button, *state);
                        }
                        WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                            app.handle_key_event(event);
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    // continuous animation: every idle turn draws the next frame
                    window.request_redraw();
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
