//! The pixel mapper abstraction
//!
//! A [`PixelMapper`] translates coordinates from the visible space an
//! application draws into, into the physical addressing space of the wired
//! panel chain. Implementations are immutable values: all wiring parameters
//! are supplied to their constructors, so a mapper that exists is a mapper
//! that is fully configured.
//!
//! ## Example
//!
//! ```
//! use panelmap::{Dimensions, PixelMapper, RotateMapper};
//!
//! let mapper = match RotateMapper::new(1, 1, Some("90")) {
//!     Ok(mapper) => mapper,
//!     Err(_) => return,
//! };
//! let matrix = Dimensions::new(64, 32);
//! let visible = match mapper.visible_dimensions(matrix) {
//!     Ok(visible) => visible,
//!     Err(_) => return,
//! };
//! assert_eq!(visible, Dimensions::new(32, 64));
//! assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 0), (63, 0));
//! ```

use crate::error::SizeError;

/// A rectangle of pixel addresses, origin top-left
///
/// Used both for the physical matrix space (everything the wired chain can
/// address) and for the visible space a mapper derives from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The same rectangle with width and height swapped
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Translates visible pixel coordinates into physical matrix coordinates
///
/// Implementations are read-only after construction, so a single mapper can
/// be shared freely between rendering threads (`Send + Sync` is part of the
/// contract).
///
/// The usual call sequence is: construct (or [`find`] in a registry), query
/// [`visible_dimensions`] once, then call [`map_visible_to_matrix`] once per
/// pixel while rendering.
///
/// [`find`]: crate::registry::MapperRegistry::find
/// [`visible_dimensions`]: PixelMapper::visible_dimensions
/// [`map_visible_to_matrix`]: PixelMapper::map_visible_to_matrix
pub trait PixelMapper: Send + Sync {
    /// Stable display name
    ///
    /// Doubles as the registry key after case folding.
    fn name(&self) -> &str;

    /// Visible dimensions derived from the physical matrix dimensions
    ///
    /// # Errors
    ///
    /// Some mappers carry divisibility constraints that depend on the matrix
    /// dimensions and can therefore only be checked here, independently of
    /// construction.
    fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError>;

    /// Map a visible coordinate to its physical matrix coordinate
    ///
    /// Pure with respect to the mapper's configuration. The caller must pass
    /// an `(x, y)` within the visible rectangle reported by
    /// [`visible_dimensions`](PixelMapper::visible_dimensions); the result
    /// for out-of-bounds input is unspecified.
    fn map_visible_to_matrix(&self, matrix: Dimensions, x: u32, y: u32) -> (u32, u32);
}

#[cfg(feature = "alloc")]
impl<M: PixelMapper + ?Sized> PixelMapper for alloc::boxed::Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
        (**self).visible_dimensions(matrix)
    }

    fn map_visible_to_matrix(&self, matrix: Dimensions, x: u32, y: u32) -> (u32, u32) {
        (**self).map_visible_to_matrix(matrix, x, y)
    }
}

/// Walks the whole visible rectangle and checks that the mapping lands
/// in-bounds and hits every physical address exactly once.
#[cfg(test)]
pub(crate) fn assert_maps_one_to_one(mapper: &dyn PixelMapper, matrix: Dimensions) {
    let visible = match mapper.visible_dimensions(matrix) {
        Ok(visible) => visible,
        Err(err) => panic!("{}: size mapping failed: {err}", mapper.name()),
    };
    let mut seen = alloc::vec![false; (matrix.width * matrix.height) as usize];
    for y in 0..visible.height {
        for x in 0..visible.width {
            let (mx, my) = mapper.map_visible_to_matrix(matrix, x, y);
            assert!(
                mx < matrix.width && my < matrix.height,
                "{}: ({x},{y}) mapped out of bounds to ({mx},{my})",
                mapper.name()
            );
            let index = (my * matrix.width + mx) as usize;
            assert!(
                !seen[index],
                "{}: ({x},{y}) mapped to already-used address ({mx},{my})",
                mapper.name()
            );
            seen[index] = true;
        }
    }
    assert!(
        seen.iter().all(|&hit| hit),
        "{}: mapping does not cover the full matrix",
        mapper.name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_transposed_swaps_axes() {
        let dims = Dimensions::new(128, 32);
        assert_eq!(dims.transposed(), Dimensions::new(32, 128));
        assert_eq!(dims.transposed().transposed(), dims);
    }
}
