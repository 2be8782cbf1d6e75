//! Ordered composition of mappers
//!
//! Physical installations often need more than one transformation, e.g. fold
//! a long chain into a U and then rotate the whole assembly. A
//! [`MapperStack`] applies a sequence of mappers as one: sizes fold from the
//! physical matrix outward, coordinates walk back in from the visible space.
//!
//! ## Example
//!
//! ```
//! use panelmap::{Dimensions, MapperRegistry};
//!
//! let registry = MapperRegistry::with_defaults();
//! let stack = match registry.find_all("U-mapper;Rotate:90", 4, 1) {
//!     Some(stack) => stack,
//!     None => return,
//! };
//! let matrix = Dimensions::new(128, 32);
//! let visible = match stack.visible_dimensions(matrix) {
//!     Ok(visible) => visible,
//!     Err(_) => return,
//! };
//! assert_eq!(visible, Dimensions::new(64, 64));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::SizeError;
use crate::mapper::{Dimensions, PixelMapper};

/// A sequence of mappers applied as one transformation
///
/// The first mapper pushed sits closest to the hardware: it sees the
/// physical matrix, and each further mapper sees the visible space of the
/// one before it. Coordinates passed to
/// [`map_visible_to_matrix`](MapperStack::map_visible_to_matrix) are in the
/// visible space of the last mapper pushed. An empty stack is the identity.
#[derive(Default)]
pub struct MapperStack {
    mappers: Vec<Box<dyn PixelMapper>>,
}

impl MapperStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            mappers: Vec::new(),
        }
    }

    /// Append a mapper on the visible side of the stack
    pub fn push(&mut self, mapper: Box<dyn PixelMapper>) {
        self.mappers.push(mapper);
    }

    /// Number of mappers in the stack
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Whether the stack is empty (the identity transformation)
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Visible dimensions after applying every mapper in turn
    ///
    /// # Errors
    ///
    /// Fails if any mapper's size constraints reject the dimensions it is
    /// handed at its position in the stack.
    pub fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
        let mut dims = matrix;
        for mapper in &self.mappers {
            dims = mapper.visible_dimensions(dims)?;
        }
        Ok(dims)
    }

    /// Map a visible coordinate through the whole stack
    ///
    /// # Errors
    ///
    /// Fails if any mapper's size constraints reject its input dimensions;
    /// the intermediate spaces must be sized before coordinates can walk
    /// through them.
    pub fn map_visible_to_matrix(
        &self,
        matrix: Dimensions,
        x: u32,
        y: u32,
    ) -> Result<(u32, u32), SizeError> {
        // dimensions of the space below each mapper
        let mut below = Vec::with_capacity(self.mappers.len());
        let mut dims = matrix;
        for mapper in &self.mappers {
            below.push(dims);
            dims = mapper.visible_dimensions(dims)?;
        }
        let mut x = x;
        let mut y = y;
        for (mapper, dims) in self.mappers.iter().zip(below.iter()).rev() {
            let (nx, ny) = mapper.map_visible_to_matrix(*dims, x, y);
            x = nx;
            y = ny;
        }
        Ok((x, y))
    }
}
