//! U-shaped chain folding mapper
//!
//! Takes one long chain of panels and bends it around after half the panels,
//! so the display gets twice as tall while using a single chain. A chain of
//! four 64x32 panels
//!
//! ```text
//!    [<][<][<][<]  }- controller
//! ```
//!
//! becomes a 128x64 display when folded:
//!
//! ```text
//!    [<][<]  }- controller
//!    [>][>]
//! ```
//!
//! The fold repeats per parallel chain, so two chains of eight panels form
//! two stacked U-shapes:
//!
//! ```text
//!    [<][<][<][<]  }- connector 1
//!    [>][>][>][>]
//!    [<][<][<][<]  }- connector 2
//!    [>][>][>][>]
//! ```

use crate::error::{ConfigError, SizeError};
use crate::mapper::{Dimensions, PixelMapper};

/// Folds each chain in half into a U shape
///
/// The visible display is half as wide and twice as tall as the physical
/// matrix space. Takes no parameter; the chain and parallel counts drive
/// everything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UArrangementMapper {
    parallel: u32,
}

impl UArrangementMapper {
    /// Create a folding mapper from wiring parameters
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ChainTooShort` for a chain of fewer than two
    /// panels and `ConfigError::ChainNotEven` when the chain cannot be split
    /// in half.
    pub fn new(chain: u32, parallel: u32, _param: Option<&str>) -> Result<Self, ConfigError> {
        // a chain of two folds into a 1x2 column, which works but is hardly
        // worth the cabling; anything shorter cannot fold at all
        if chain < 2 {
            return Err(ConfigError::ChainTooShort { chain });
        }
        if chain % 2 != 0 {
            return Err(ConfigError::ChainNotEven { chain });
        }
        Ok(Self { parallel })
    }
}

impl PixelMapper for UArrangementMapper {
    fn name(&self) -> &str {
        "U-mapper"
    }

    fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
        if matrix.height % self.parallel != 0 {
            return Err(SizeError::HeightNotDivisible {
                height: matrix.height,
                parallel: self.parallel,
            });
        }
        // width splits at the 32px panel boundary
        Ok(Dimensions::new(
            (matrix.width / 64) * 32,
            2 * matrix.height,
        ))
    }

    fn map_visible_to_matrix(&self, matrix: Dimensions, x: u32, y: u32) -> (u32, u32) {
        let panel_height = matrix.height / self.parallel;
        let visible_width = (matrix.width / 64) * 32;
        // one folded U shape
        let slab_height = 2 * panel_height;
        let base_y = (y / slab_height) * panel_height;
        let mut x = x;
        let mut y = y % slab_height;
        if y < panel_height {
            // top leg: the far half of the physical chain
            x += matrix.width / 2;
        } else {
            // bottom leg: folded back, mirrored on both axes within the slab
            x = visible_width - x - 1;
            y = slab_height - y - 1;
        }
        (x, base_y + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::assert_maps_one_to_one;

    #[test]
    fn test_chain_of_one_is_rejected() {
        let result = UArrangementMapper::new(1, 1, None);
        assert!(matches!(result, Err(ConfigError::ChainTooShort { chain: 1 })));
    }

    #[test]
    fn test_odd_chain_is_rejected() {
        let result = UArrangementMapper::new(3, 1, None);
        assert!(matches!(result, Err(ConfigError::ChainNotEven { chain: 3 })));
    }

    #[test]
    fn test_chain_of_two_is_accepted() {
        assert!(UArrangementMapper::new(2, 1, None).is_ok());
    }

    #[test]
    fn test_visible_size_folds_in_half() {
        let mapper = UArrangementMapper::new(4, 1, None).unwrap();
        let visible = mapper
            .visible_dimensions(Dimensions::new(128, 32))
            .unwrap();
        assert_eq!(visible, Dimensions::new(64, 64));
    }

    #[test]
    fn test_height_must_divide_over_parallel_chains() {
        let mapper = UArrangementMapper::new(4, 3, None).unwrap();
        let result = mapper.visible_dimensions(Dimensions::new(128, 32));
        assert!(matches!(
            result,
            Err(SizeError::HeightNotDivisible {
                height: 32,
                parallel: 3
            })
        ));
    }

    #[test]
    fn test_top_leg_maps_into_far_half_of_chain() {
        let mapper = UArrangementMapper::new(4, 1, None).unwrap();
        let matrix = Dimensions::new(128, 32);
        // the upper half of the visible display lives on the far half of the
        // physical chain
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 0), (64, 0));
        assert_eq!(mapper.map_visible_to_matrix(matrix, 63, 31), (127, 31));
    }

    #[test]
    fn test_bottom_leg_folds_back_mirrored() {
        let mapper = UArrangementMapper::new(4, 1, None).unwrap();
        let matrix = Dimensions::new(128, 32);
        // the lower half folds back: both axes mirrored within the slab
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 32), (63, 31));
        assert_eq!(mapper.map_visible_to_matrix(matrix, 63, 63), (0, 0));
    }

    #[test]
    fn test_parallel_chains_fold_independently() {
        let mapper = UArrangementMapper::new(4, 2, None).unwrap();
        let matrix = Dimensions::new(128, 64);
        let visible = mapper.visible_dimensions(matrix).unwrap();
        assert_eq!(visible, Dimensions::new(64, 128));
        // second slab starts on the second physical panel row
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 64), (64, 32));
    }

    #[test]
    fn test_fold_maps_one_to_one() {
        let mapper = UArrangementMapper::new(4, 1, None).unwrap();
        assert_maps_one_to_one(&mapper, Dimensions::new(128, 32));

        let mapper = UArrangementMapper::new(4, 2, None).unwrap();
        assert_maps_one_to_one(&mapper, Dimensions::new(128, 64));
    }
}
