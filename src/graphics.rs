//! Graphics support via embedded-graphics
//!
//! This module provides [`RemappedDrawTarget`], which wraps any
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) addressed
//! in physical matrix coordinates and exposes the mapper's visible space
//! instead. Drawing code works in visible coordinates; every pixel is
//! translated on its way through. No pixel storage lives here, only the
//! coordinate plumbing.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::pixelcolor::BinaryColor;
//! use embedded_graphics::prelude::*;
//! use panelmap::{Dimensions, RemappedDrawTarget, RotateMapper};
//! # use core::convert::Infallible;
//! # struct Panel;
//! # impl OriginDimensions for Panel {
//! #     fn size(&self) -> Size { Size::new(64, 32) }
//! # }
//! # impl DrawTarget for Panel {
//! #     type Color = BinaryColor;
//! #     type Error = Infallible;
//! #     fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
//! #     where
//! #         I: IntoIterator<Item = Pixel<BinaryColor>>,
//! #     {
//! #         Ok(())
//! #     }
//! # }
//! # let panel = Panel;
//! let mapper = match RotateMapper::new(1, 1, Some("90")) {
//!     Ok(mapper) => mapper,
//!     Err(_) => return,
//! };
//! let mut display = match RemappedDrawTarget::new(panel, mapper, Dimensions::new(64, 32)) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! // the drawing surface is the rotated 32x64 space
//! assert_eq!(display.size(), Size::new(32, 64));
//! let _ = Pixel(Point::new(0, 0), BinaryColor::On).draw(&mut display);
//! ```

use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};

use crate::error::SizeError;
use crate::mapper::{Dimensions, PixelMapper};

/// Draw target adapter that translates visible coordinates while drawing
///
/// Reports the mapper's visible space as its size; pixels outside that space
/// (including negative coordinates) are dropped, matching the usual draw
/// target contract of ignoring out-of-bounds drawing.
pub struct RemappedDrawTarget<D, M> {
    target: D,
    mapper: M,
    matrix: Dimensions,
    visible: Dimensions,
}

impl<D, M: PixelMapper> RemappedDrawTarget<D, M> {
    /// Wrap a physical-space draw target
    ///
    /// `matrix` is the physical dimensions the inner target is addressed in.
    ///
    /// # Errors
    ///
    /// Fails if the mapper's size constraints reject the matrix dimensions.
    pub fn new(target: D, mapper: M, matrix: Dimensions) -> Result<Self, SizeError> {
        let visible = mapper.visible_dimensions(matrix)?;
        Ok(Self {
            target,
            mapper,
            matrix,
            visible,
        })
    }

    /// The wrapped draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Consume the adapter and return the wrapped draw target
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D, M> DrawTarget for RemappedDrawTarget<D, M>
where
    D: DrawTarget,
    M: PixelMapper,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let matrix = self.matrix;
        let visible = self.visible;
        let mapper = &self.mapper;
        let mapped = pixels.into_iter().filter_map(|Pixel(point, color)| {
            if point.x < 0 || point.y < 0 {
                return None;
            }
            let x = point.x as u32;
            let y = point.y as u32;
            if x >= visible.width || y >= visible.height {
                return None;
            }
            let (mx, my) = mapper.map_visible_to_matrix(matrix, x, y);
            Some(Pixel(Point::new(mx as i32, my as i32), color))
        });
        self.target.draw_iter(mapped)
    }
}

impl<D, M> OriginDimensions for RemappedDrawTarget<D, M> {
    fn size(&self) -> Size {
        Size::new(self.visible.width, self.visible.height)
    }
}
