//! Quarter-turn rotation mapper
//!
//! Rotates the whole display in 90 degree steps. The parameter is the angle
//! in degrees; an absent or empty parameter means no rotation. Angles outside
//! `[0, 360)` are normalized, so `-90` and `270` configure the same mapper.
//!
//! ## Example
//!
//! ```
//! use panelmap::{Dimensions, PixelMapper, RotateMapper};
//!
//! let mapper = match RotateMapper::new(1, 1, Some("180")) {
//!     Ok(mapper) => mapper,
//!     Err(_) => return,
//! };
//! let matrix = Dimensions::new(64, 32);
//! assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 0), (63, 31));
//! ```

use crate::error::{ConfigError, SizeError};
use crate::mapper::{Dimensions, PixelMapper};

/// Rotation relative to the native panel orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees
    Rotate270,
}

/// Rotates visible coordinates in quarter turns
///
/// Width and height swap for 90 and 270 degrees. Applying a 90 degree
/// rotation four times in a row composes to the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateMapper {
    rotation: Rotation,
}

impl RotateMapper {
    /// Create a rotation mapper from wiring parameters
    ///
    /// The chain and parallel counts do not affect rotation and are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RotationNotANumber` if the parameter is not a
    /// decimal integer, or `ConfigError::RotationNotRightAngle` if it is not
    /// a multiple of 90.
    pub fn new(_chain: u32, _parallel: u32, param: Option<&str>) -> Result<Self, ConfigError> {
        let param = param.unwrap_or("");
        if param.is_empty() {
            return Ok(Self {
                rotation: Rotation::Rotate0,
            });
        }
        let angle: i32 = param
            .parse()
            .map_err(|_| ConfigError::RotationNotANumber)?;
        let rotation = match angle.rem_euclid(360) {
            0 => Rotation::Rotate0,
            90 => Rotation::Rotate90,
            180 => Rotation::Rotate180,
            270 => Rotation::Rotate270,
            _ => return Err(ConfigError::RotationNotRightAngle { angle }),
        };
        Ok(Self { rotation })
    }

    /// The configured rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl PixelMapper for RotateMapper {
    fn name(&self) -> &str {
        "Rotate"
    }

    fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
        Ok(match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => matrix,
            Rotation::Rotate90 | Rotation::Rotate270 => matrix.transposed(),
        })
    }

    fn map_visible_to_matrix(&self, matrix: Dimensions, x: u32, y: u32) -> (u32, u32) {
        match self.rotation {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (matrix.width - y - 1, x),
            Rotation::Rotate180 => (matrix.width - x - 1, matrix.height - y - 1),
            Rotation::Rotate270 => (y, matrix.height - x - 1),
        }
    }
}
