use crate::core::data::complex::Complex;
use crate::core::data::raster::RasterSpec;
use crate::core::data::view_window::ViewWindow;
use clap::ValueEnum;
use thiserror::Error;

const DEFAULT_BASE_DEPTH: u32 = 30;
const DEFAULT_ZOOM_OFFSET: f64 = -20.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("base depth must be at least 1")]
    ZeroBaseDepth,

    #[error("{name} factor must be finite and greater than zero, got {value}")]
    InvalidFactor { name: &'static str, value: f64 },

    #[error("initial zoom offset must be finite, got {0}")]
    NonFiniteZoomOffset(f64),

    #[error("aim point must be finite, got ({re}, {im})")]
    NonFiniteAim { re: f64, im: f64 },
}

/// Per-frame scale factors. Values above 1 zoom in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactors {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Named sets of aim point and zoom speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ZoomPreset {
    /// Slow dive into a mini-brot on the real axis.
    #[default]
    Classic,
    /// Fast dive into the upper antenna region.
    Rapid,
}

impl ZoomPreset {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Rapid];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Rapid => "Rapid",
        }
    }

    #[must_use]
    pub fn aim(&self) -> Complex {
        match self {
            Self::Classic => Complex::new(-1.6952474085188116, -4.843763163165963e-4),
            Self::Rapid => Complex::new(-1.9, 0.258),
        }
    }

    #[must_use]
    pub fn factors(&self) -> ZoomFactors {
        match self {
            Self::Classic => ZoomFactors {
                x: 1.25,
                y: 1.25,
                depth: 1.04785,
            },
            Self::Rapid => ZoomFactors {
                x: 5.25,
                y: 5.25,
                depth: 1.00957,
            },
        }
    }
}

/// Startup parameters of a zoom session. Fixed once the session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub preset: ZoomPreset,
    pub raster: RasterSpec,
    pub window: ViewWindow,
    pub aim: Complex,
    pub factors: ZoomFactors,
    pub base_depth: u32,
    pub zoom_offset: f64,
    pub start_paused: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::from_preset(ZoomPreset::default())
    }
}

impl ZoomConfig {
    #[must_use]
    pub fn from_preset(preset: ZoomPreset) -> Self {
        Self {
            preset,
            raster: RasterSpec::DEFAULT,
            window: ViewWindow::FULL_SET,
            aim: preset.aim(),
            factors: preset.factors(),
            base_depth: DEFAULT_BASE_DEPTH,
            zoom_offset: DEFAULT_ZOOM_OFFSET,
            start_paused: true,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_depth == 0 {
            return Err(ConfigError::ZeroBaseDepth);
        }

        for (name, value) in [
            ("x zoom", self.factors.x),
            ("y zoom", self.factors.y),
            ("depth", self.factors.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }

        if !self.zoom_offset.is_finite() {
            return Err(ConfigError::NonFiniteZoomOffset(self.zoom_offset));
        }

        if !self.aim.is_finite() {
            return Err(ConfigError::NonFiniteAim {
                re: self.aim.re,
                im: self.aim.im,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_classic_preset() {
        let config = ZoomConfig::default();

        assert_eq!(config.preset, ZoomPreset::Classic);
        assert_eq!(config.raster, RasterSpec::new(1000, 1000).unwrap());
        assert_eq!(config.window, ViewWindow::FULL_SET);
        assert_eq!(config.base_depth, 30);
        assert_eq!(config.zoom_offset, -20.0);
        assert!(config.start_paused);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn every_preset_is_valid() {
        for &preset in ZoomPreset::ALL {
            let config = ZoomConfig::from_preset(preset);

            assert!(config.validate().is_ok(), "{}", preset.display_name());
            assert_eq!(config.aim, preset.aim());
            assert!(config.window.contains(config.aim));
        }
    }

    #[test]
    fn rapid_preset_zooms_faster_than_classic() {
        let classic = ZoomPreset::Classic.factors();
        let rapid = ZoomPreset::Rapid.factors();

        assert!(rapid.x > classic.x);
        assert!(rapid.y > classic.y);
    }

    #[test]
    fn presets_parse_from_lowercase_names() {
        assert_eq!(ZoomPreset::from_str("classic", true), Ok(ZoomPreset::Classic));
        assert_eq!(ZoomPreset::from_str("rapid", true), Ok(ZoomPreset::Rapid));
        assert!(ZoomPreset::from_str("warp", true).is_err());
    }

    #[test]
    fn zero_base_depth_is_rejected() {
        let config = ZoomConfig {
            base_depth: 0,
            ..ZoomConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroBaseDepth));
    }

    #[test]
    fn non_positive_factor_is_rejected() {
        let config = ZoomConfig {
            factors: ZoomFactors {
                y: 0.0,
                ..ZoomPreset::Classic.factors()
            },
            ..ZoomConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidFactor {
                name: "y zoom",
                value: 0.0
            })
        );
    }

    #[test]
    fn non_finite_depth_factor_is_rejected() {
        let config = ZoomConfig {
            factors: ZoomFactors {
                depth: f64::INFINITY,
                ..ZoomPreset::Classic.factors()
            },
            ..ZoomConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFactor { name: "depth", .. })
        ));
    }

    #[test]
    fn non_finite_offset_and_aim_are_rejected() {
        let bad_offset = ZoomConfig {
            zoom_offset: f64::NAN,
            ..ZoomConfig::default()
        };
        let bad_aim = ZoomConfig {
            aim: Complex::new(f64::INFINITY, 0.0),
            ..ZoomConfig::default()
        };

        assert!(matches!(
            bad_offset.validate(),
            Err(ConfigError::NonFiniteZoomOffset(_))
        ));
        assert!(matches!(
            bad_aim.validate(),
            Err(ConfigError::NonFiniteAim { .. })
        ));
    }
}
