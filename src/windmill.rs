//! Windmill pinwheel mapper
//!
//! Two parallel chains of portrait-mounted panels start at the center of the
//! display and extend outward to the left and to the right. Every panel is
//! turned 90 degrees, so a chain of 64x32 panels laid end to end contributes
//! 32 pixels of width per panel while the full display stays 64 pixels tall:
//!
//! ```text
//!   [^][^][^] | [v][v][v]
//!    chain 0  |  chain 1
//!      <--- center --->
//! ```
//!
//! The assembled display is `panel_height * chain * parallel` wide and
//! `panel_width` tall.
//!
//! Optional flags, separated by `:`, `,`, `;` or spaces:
//! - `Z` flips every other panel in each chain (serpentine cabling)
//! - `S` swaps which chain serves the left and the right half

use crate::error::{ConfigError, SizeError};
use crate::mapper::{Dimensions, PixelMapper};

/// Maps two center-out chains of portrait panels onto one wide display
///
/// Requires exactly two parallel chains; one serves the left half and one
/// the right half, counted outward from the shared center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindmillMapper {
    chain: u32,
    parallel: u32,
    serpentine: bool,
    swap_channels: bool,
}

impl WindmillMapper {
    /// Create a windmill mapper from wiring parameters
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParallelNotTwo` unless `parallel == 2`, and
    /// `ConfigError::UnknownFlag` for any parameter character other than
    /// `Z`, `S` or a separator.
    pub fn new(chain: u32, parallel: u32, param: Option<&str>) -> Result<Self, ConfigError> {
        if parallel != 2 {
            return Err(ConfigError::ParallelNotTwo { parallel });
        }
        let mut serpentine = false;
        let mut swap_channels = false;
        if let Some(param) = param {
            for flag in param.chars() {
                match flag {
                    ':' | ',' | ';' | ' ' => {}
                    'Z' | 'z' => serpentine = true,
                    'S' | 's' => swap_channels = true,
                    flag => return Err(ConfigError::UnknownFlag { flag }),
                }
            }
        }
        Ok(Self {
            chain,
            parallel,
            serpentine,
            swap_channels,
        })
    }
}

impl PixelMapper for WindmillMapper {
    fn name(&self) -> &str {
        "Windmill"
    }

    fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
        let panel_width = matrix.width / self.chain;
        let panel_height = matrix.height / self.parallel;
        // each portrait panel contributes panel_height pixels of width; the
        // final height is one panel width
        Ok(Dimensions::new(
            panel_height * self.chain * self.parallel,
            panel_width,
        ))
    }

    fn map_visible_to_matrix(&self, matrix: Dimensions, x: u32, y: u32) -> (u32, u32) {
        let panel_width = matrix.width / self.chain;
        let panel_height = matrix.height / self.parallel;

        // which rotated panel along the visible width, and where within it
        let panel_index = x / panel_height;
        let rx = x % panel_height;
        let ry = y;

        // split the panel slots into the half left of center and the half
        // right of center, counting positions outward from the center
        let half = self.chain;
        let is_left_half = panel_index < half;
        let idx_in_half = if is_left_half {
            half - 1 - panel_index
        } else {
            panel_index - half
        };

        // one parallel channel serves each half
        let (p_left, p_right) = if self.swap_channels { (1, 0) } else { (0, 1) };
        let p = if is_left_half { p_left } else { p_right };
        // left half: chain position counts from the far left toward center;
        // right half: scanning from center to the far right
        let cpos = if is_left_half {
            panel_index
        } else {
            self.chain - 1 - idx_in_half
        };

        // turn the within-panel offset a quarter counter-clockwise, back into
        // the portrait panel's native orientation
        let mut ux = ry;
        let mut uy = panel_height - 1 - rx;

        // the left half needs a vertical flip so both halves share the
        // display's top-left origin
        if is_left_half {
            uy = panel_height - 1 - uy;
        }

        // serpentine cabling: every other panel along a chain is mounted
        // upside down
        if self.serpentine && cpos % 2 == 1 {
            ux = panel_width - 1 - ux;
            uy = panel_height - 1 - uy;
        }

        let matrix_x = cpos * panel_width + ux;
        let matrix_y = p * panel_height + uy;

        // the composed turn-and-flip leaves left-half panels rotated by 180
        // degrees; undo that on the way out, keeping the steps above intact
        if is_left_half {
            (
                (cpos + 1) * panel_width - 1 - ux,
                (p + 1) * panel_height - 1 - uy,
            )
        } else {
            (matrix_x, matrix_y)
        }
    }
}
