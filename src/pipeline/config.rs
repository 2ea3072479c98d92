//! Pipeline configuration.

use crate::error::{Error, Result};
use crate::present::{DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH};
use crate::spectrum::DEFAULT_MAGNITUDE_FLOOR;

/// Configuration for the image-to-spectrum pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Smallest magnitude fed to the logarithm. Must be positive and finite.
    pub magnitude_floor: f64,

    /// Stretch the original image to the full 0-255 range before display.
    /// Off by default: the original is shown as decoded.
    pub stretch_original: bool,

    /// Width of the box both images are fitted into, side by side.
    pub box_width: u32,

    /// Height of the box both images are fitted into.
    pub box_height: u32,

    /// Output JPEG quality (1-100) for saved canvases.
    pub output_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            magnitude_floor: DEFAULT_MAGNITUDE_FLOOR,
            stretch_original: false,
            box_width: DEFAULT_BOX_WIDTH,
            box_height: DEFAULT_BOX_HEIGHT,
            output_quality: 95,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !(self.magnitude_floor.is_finite() && self.magnitude_floor > 0.0) {
            return Err(Error::InvalidParameter {
                name: "magnitude_floor".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }

        if self.box_width == 0 || self.box_height == 0 {
            return Err(Error::InvalidParameter {
                name: "box".to_string(),
                reason: format!(
                    "sides must be greater than 0, got {}x{}",
                    self.box_width, self.box_height
                ),
            });
        }

        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::InvalidParameter {
                name: "output_quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_floor() {
        for floor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                magnitude_floor: floor,
                ..Config::default()
            };
            assert!(
                matches!(config.validate(), Err(Error::InvalidParameter { ref name, .. }) if name == "magnitude_floor"),
                "floor {floor} accepted"
            );
        }
    }

    #[test]
    fn test_rejects_empty_box() {
        let config = Config {
            box_height: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_quality_out_of_range() {
        let config = Config {
            output_quality: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
