use crate::core::data::complex::Complex;
use crate::core::data::depth::DepthState;
use crate::core::data::raster::{Pixel, RasterSpec};
use crate::core::data::view_window::ViewWindow;
use crate::core::util::pixel_coords::{pixel_to_plane, plane_to_pixel};
use crate::core::zoom::commands::ZoomCommand;
use crate::core::zoom::config::{ConfigError, ZoomConfig, ZoomFactors, ZoomPreset};
use crate::core::zoom::flags::AnimationFlags;
use crate::core::zoom::status::{ZoomUpdateReport, ZoomWarning};
use crate::core::zoom::transform::{zoom_depth, zoom_to};
use log::{info, warn};

/// Everything the renderer and the transform read or write between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    pub preset: ZoomPreset,
    pub raster: RasterSpec,
    pub window: ViewWindow,
    pub depth: DepthState,
    pub aim: Complex,
    pub factors: ZoomFactors,
    pub flags: AnimationFlags,
}

impl ZoomState {
    pub fn from_config(config: &ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            preset: config.preset,
            raster: config.raster,
            window: config.window,
            depth: DepthState::new(config.base_depth, config.zoom_offset),
            aim: config.aim,
            factors: config.factors,
            flags: AnimationFlags {
                paused: config.start_paused,
                ..AnimationFlags::default()
            },
        })
    }

    #[must_use]
    pub fn effective_cap(&self) -> u32 {
        self.depth.effective_cap()
    }

    /// Raster cell under the aim point, clamped onto the raster.
    #[must_use]
    pub fn aim_pixel(&self) -> Pixel {
        plane_to_pixel(self.aim, &self.window, self.raster)
    }

    pub fn apply(&mut self, command: ZoomCommand) {
        match command {
            ZoomCommand::Aim(pixel) => {
                let pixel = self.raster.clamp(pixel);
                self.aim = pixel_to_plane(pixel, &self.window, self.raster);
                info!("aim set to ({}, {})", self.aim.re, self.aim.im);
            }
            ZoomCommand::ToggleReverse => {
                self.flags.reverse_zoom = !self.flags.reverse_zoom;
                info!("reverse zoom {}", on_off(self.flags.reverse_zoom));
            }
            ZoomCommand::TogglePause => {
                self.flags.paused = !self.flags.paused;
                info!("animation {}", if self.flags.paused { "paused" } else { "running" });
            }
            ZoomCommand::ToggleXAxis => {
                self.flags.x_axis_paused = !self.flags.x_axis_paused;
                info!("x axis pause {}", on_off(self.flags.x_axis_paused));
            }
            ZoomCommand::ToggleYAxis => {
                self.flags.y_axis_paused = !self.flags.y_axis_paused;
                info!("y axis pause {}", on_off(self.flags.y_axis_paused));
            }
            ZoomCommand::ToggleDepth => {
                self.flags.depth_paused = !self.flags.depth_paused;
                info!("depth pause {}", on_off(self.flags.depth_paused));
            }
        }
    }

    /// One animation step: bounds first, then depth.
    pub fn advance(&mut self) -> ZoomUpdateReport {
        let mut report = zoom_to(&mut self.window, self.aim, &self.factors, &self.flags);
        report.depth_updated = zoom_depth(&mut self.depth, self.factors.depth, &self.flags);

        match report.warning {
            Some(ZoomWarning::PrecisionExhausted) => {
                warn!("f64 precision exhausted, holding window at {:?}", self.window);
            }
            Some(ZoomWarning::ExtentOverflow) => {
                warn!("window extent overflowed, holding window at {:?}", self.window);
            }
            None => {}
        }

        report
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> ZoomState {
        let config = ZoomConfig {
            start_paused: false,
            ..ZoomConfig::default()
        };
        ZoomState::from_config(&config).unwrap()
    }

    #[test]
    fn from_config_copies_startup_values() {
        let config = ZoomConfig::from_preset(ZoomPreset::Rapid);
        let state = ZoomState::from_config(&config).unwrap();

        assert_eq!(state.preset, ZoomPreset::Rapid);
        assert_eq!(state.window, ViewWindow::FULL_SET);
        assert_eq!(state.aim, Complex::new(-1.9, 0.258));
        assert_eq!(state.depth, DepthState::new(30, -20.0));
        assert!(state.flags.paused);
        assert!(!state.flags.reverse_zoom);
        assert_eq!(state.effective_cap(), 10);
    }

    #[test]
    fn from_config_rejects_invalid_config() {
        let config = ZoomConfig {
            base_depth: 0,
            ..ZoomConfig::default()
        };

        assert_eq!(
            ZoomState::from_config(&config),
            Err(ConfigError::ZeroBaseDepth)
        );
    }

    #[test]
    fn aim_command_maps_pixel_corner_to_plane() {
        let mut state = running_state();

        state.apply(ZoomCommand::Aim(Pixel { x: 750, y: 250 }));

        assert_eq!(state.aim, Complex::new(1.0, -1.0));
        assert_eq!(state.aim_pixel(), Pixel { x: 750, y: 250 });
    }

    #[test]
    fn aim_command_puts_crosshair_on_clicked_cell() {
        let mut state = running_state();

        for pixel in [
            Pixel { x: 36, y: 36 },
            Pixel { x: 1, y: 998 },
            Pixel { x: 333, y: 667 },
        ] {
            state.apply(ZoomCommand::Aim(pixel));
            assert_eq!(state.aim_pixel(), pixel);
        }
    }

    #[test]
    fn clicked_cells_survive_sixty_classic_frames() {
        let mut state = running_state();

        for frame in 0..60 {
            for y in [0, 1, 333, 500, 998, 999] {
                for x in 0..state.raster.width() {
                    let pixel = Pixel { x, y };
                    let point = pixel_to_plane(pixel, &state.window, state.raster);

                    assert_eq!(
                        plane_to_pixel(point, &state.window, state.raster),
                        pixel,
                        "frame {frame}"
                    );
                }
            }
            state.advance();
        }

        state.apply(ZoomCommand::Aim(Pixel { x: 36, y: 36 }));
        assert_eq!(state.aim_pixel(), Pixel { x: 36, y: 36 });
    }

    #[test]
    fn aim_command_clamps_pixels_outside_raster() {
        let mut state = running_state();

        state.apply(ZoomCommand::Aim(Pixel { x: 5000, y: 0 }));

        assert_eq!(state.aim_pixel(), Pixel { x: 999, y: 0 });
    }

    #[test]
    fn toggles_flip_exactly_one_flag() {
        let mut state = running_state();

        state.apply(ZoomCommand::ToggleDepth);
        assert!(state.flags.depth_paused);
        state.apply(ZoomCommand::ToggleXAxis);
        assert!(state.flags.x_axis_paused);
        state.apply(ZoomCommand::ToggleYAxis);
        assert!(state.flags.y_axis_paused);
        state.apply(ZoomCommand::ToggleReverse);
        assert!(state.flags.reverse_zoom);
        state.apply(ZoomCommand::TogglePause);
        assert!(state.flags.paused);

        state.apply(ZoomCommand::ToggleDepth);
        state.apply(ZoomCommand::ToggleXAxis);
        state.apply(ZoomCommand::ToggleYAxis);
        state.apply(ZoomCommand::ToggleReverse);
        state.apply(ZoomCommand::TogglePause);
        assert_eq!(state.flags, AnimationFlags::default());
    }

    #[test]
    fn advance_moves_window_and_depth() {
        let mut state = running_state();

        let report = state.advance();

        assert!(report.x_updated && report.y_updated && report.depth_updated);
        assert!(state.window.width() < 4.0);
        assert!(state.window.height() < 4.0);
        assert!(state.depth.zoom_offset > -20.0);
    }

    #[test]
    fn advance_while_paused_is_a_no_op() {
        let mut state = running_state();
        state.apply(ZoomCommand::TogglePause);
        let before = state.clone();

        let report = state.advance();

        assert_eq!(state, before);
        assert_eq!(report, ZoomUpdateReport::default());
    }

    #[test]
    fn advance_with_paused_depth_only_moves_window() {
        let mut state = running_state();
        state.apply(ZoomCommand::ToggleDepth);

        let report = state.advance();

        assert!(report.x_updated);
        assert!(!report.depth_updated);
        assert_eq!(state.depth.zoom_offset, -20.0);
    }
}
