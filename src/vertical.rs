//! Vertical stacking mapper
//!
//! Turns a `chain x parallel` grid of panels into one tall column: each panel
//! of the chain becomes one row of the visible display. The optional `Z`
//! parameter enables serpentine cabling, where every other panel is mounted
//! upside down so the output connector sits next to the next panel's input:
//!
//! ```text
//! [ O < I ]   without Z        [ O < I ]
//!   ,---^       <----               ^
//! [ O < I ]                    [ I > O ]
//!   ,---^             with Z        ^
//! [ O < I ]            --->    [ O < I ]
//! ```

use crate::error::{ConfigError, SizeError};
use crate::mapper::{Dimensions, PixelMapper};

/// Stacks the panels of each chain into a single visible column
///
/// With the serpentine flag set, alternating panel rows are mounted upside
/// down and their coordinates are flipped on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalMapper {
    chain: u32,
    parallel: u32,
    serpentine: bool,
}

impl VerticalMapper {
    /// Create a vertical mapper from wiring parameters
    ///
    /// The parameter `"Z"` (case-insensitive) enables serpentine flipping of
    /// every other panel; anything else leaves it off.
    ///
    /// # Errors
    ///
    /// Currently infallible; the fallible signature matches the other
    /// mappers so all constructors register uniformly.
    pub fn new(chain: u32, parallel: u32, param: Option<&str>) -> Result<Self, ConfigError> {
        let serpentine = matches!(param, Some(p) if p.eq_ignore_ascii_case("z"));
        Ok(Self {
            chain,
            parallel,
            serpentine,
        })
    }
}

impl PixelMapper for VerticalMapper {
    fn name(&self) -> &str {
        "V-mapper"
    }

    fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
        Ok(Dimensions::new(
            matrix.width * self.parallel / self.chain,
            matrix.height * self.chain / self.parallel,
        ))
    }

    fn map_visible_to_matrix(&self, matrix: Dimensions, x: u32, y: u32) -> (u32, u32) {
        let panel_width = matrix.width / self.chain;
        let panel_height = matrix.height / self.parallel;
        // The panel the cable plugs into ends up as the bottom panel while
        // coordinates start at the top panel, and the first panel of a chain
        // is typically not wired upside down. Whether a given panel row gets
        // flipped therefore depends on the parity of the total panel count;
        // otherwise adding a fifth panel to a four-high column would reverse
        // every previously mounted panel.
        let odd_panel_count = (matrix.width / panel_width) % 2;
        let x_panel_start = y / panel_height * panel_width;
        let y_panel_start = x / panel_width * panel_height;
        let x_within_panel = x % panel_width;
        let y_within_panel = y % panel_height;
        let needs_flipping = self.serpentine && odd_panel_count == (y / panel_height) % 2;
        if needs_flipping {
            (
                x_panel_start + panel_width - 1 - x_within_panel,
                y_panel_start + panel_height - 1 - y_within_panel,
            )
        } else {
            (x_panel_start + x_within_panel, y_panel_start + y_within_panel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::assert_maps_one_to_one;

    #[test]
    fn test_visible_size_trades_width_for_height() {
        let mapper = VerticalMapper::new(2, 1, None).unwrap();
        let visible = mapper.visible_dimensions(Dimensions::new(64, 32)).unwrap();
        assert_eq!(visible, Dimensions::new(32, 64));

        let mapper = VerticalMapper::new(4, 2, None).unwrap();
        let visible = mapper
            .visible_dimensions(Dimensions::new(128, 64))
            .unwrap();
        assert_eq!(visible, Dimensions::new(64, 128));
    }

    #[test]
    fn test_panel_rows_read_along_the_chain() {
        let mapper = VerticalMapper::new(2, 1, None).unwrap();
        let matrix = Dimensions::new(64, 32);
        // first visible panel row is the first panel of the chain
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 0), (0, 0));
        assert_eq!(mapper.map_visible_to_matrix(matrix, 31, 31), (31, 31));
        // second visible panel row continues on the next panel
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 32), (32, 0));
        assert_eq!(mapper.map_visible_to_matrix(matrix, 31, 63), (63, 31));
    }

    #[test]
    fn test_serpentine_flips_alternating_rows_even_count() {
        let mapper = VerticalMapper::new(2, 1, Some("Z")).unwrap();
        let matrix = Dimensions::new(64, 32);
        // with an even panel count the first visible row is the flipped one
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 0), (31, 31));
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 32), (32, 0));
    }

    #[test]
    fn test_serpentine_flips_alternating_rows_odd_count() {
        let mapper = VerticalMapper::new(3, 1, Some("z")).unwrap();
        let matrix = Dimensions::new(96, 32);
        // with an odd panel count the middle row is the flipped one
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 0), (0, 0));
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 32), (63, 31));
        assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 64), (64, 0));
    }

    #[test]
    fn test_parameter_must_be_exactly_z() {
        let flagged = VerticalMapper::new(2, 1, Some("Z")).unwrap();
        let plain = VerticalMapper::new(2, 1, Some("ZZ")).unwrap();
        assert_ne!(flagged, plain);
        assert_eq!(plain, VerticalMapper::new(2, 1, None).unwrap());
    }

    #[test]
    fn test_column_maps_one_to_one() {
        let matrix = Dimensions::new(64, 32);
        for param in [None, Some("Z")] {
            let mapper = VerticalMapper::new(2, 1, param).unwrap();
            assert_maps_one_to_one(&mapper, matrix);
        }

        let matrix = Dimensions::new(128, 64);
        for param in [None, Some("Z")] {
            let mapper = VerticalMapper::new(4, 2, param).unwrap();
            assert_maps_one_to_one(&mapper, matrix);
        }
    }
}
