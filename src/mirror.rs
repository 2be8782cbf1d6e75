//! Horizontal/vertical mirror mapper
//!
//! Flips the display along one axis, for panels that are viewed through a
//! mirror or mounted facing backwards. The parameter selects the axis:
//! `H` (the default) flips left-to-right, `V` flips top-to-bottom.

use crate::error::{ConfigError, SizeError};
use crate::mapper::{Dimensions, PixelMapper};

/// Axis a [`MirrorMapper`] flips along
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MirrorAxis {
    /// Flip left-to-right
    #[default]
    Horizontal,
    /// Flip top-to-bottom
    Vertical,
}

/// Mirrors visible coordinates along one axis
///
/// The visible size always equals the matrix size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MirrorMapper {
    axis: MirrorAxis,
}

impl MirrorMapper {
    /// Create a mirror mapper from wiring parameters
    ///
    /// The chain and parallel counts do not affect mirroring and are ignored.
    /// An absent or empty parameter selects the horizontal axis.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MirrorAxisNotSingleChar` for parameters longer
    /// than one character, and `ConfigError::UnknownMirrorAxis` for a single
    /// character other than `H`/`h`/`V`/`v`.
    pub fn new(_chain: u32, _parallel: u32, param: Option<&str>) -> Result<Self, ConfigError> {
        let param = param.unwrap_or("");
        let mut chars = param.chars();
        let axis = match (chars.next(), chars.next()) {
            (None, _) => MirrorAxis::Horizontal,
            (Some(_), Some(_)) => return Err(ConfigError::MirrorAxisNotSingleChar),
            (Some('H' | 'h'), None) => MirrorAxis::Horizontal,
            (Some('V' | 'v'), None) => MirrorAxis::Vertical,
            (Some(axis), None) => return Err(ConfigError::UnknownMirrorAxis { axis }),
        };
        Ok(Self { axis })
    }

    /// The configured flip axis
    pub fn axis(&self) -> MirrorAxis {
        self.axis
    }
}

impl PixelMapper for MirrorMapper {
    fn name(&self) -> &str {
        "Mirror"
    }

    fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
        Ok(matrix)
    }

    fn map_visible_to_matrix(&self, matrix: Dimensions, x: u32, y: u32) -> (u32, u32) {
        match self.axis {
            MirrorAxis::Horizontal => (matrix.width - 1 - x, y),
            MirrorAxis::Vertical => (x, matrix.height - 1 - y),
        }
    }
}
