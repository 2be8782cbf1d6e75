//! Pixel coordinate mapping for chained LED matrix panels
//!
//! Applications draw into a convenient "visible" coordinate space; the
//! panels actually hang on daisy chains wired however the installation
//! demanded. This crate translates every visible pixel coordinate into the
//! physical addressing coordinate of the wired chain.
//!
//! ## Features
//!
//! - `no_std` compatible; mappers themselves are allocation-free
//! - Five built-in arrangements: quarter-turn rotation, mirroring, U-shaped
//!   chain folding, vertical stacking, and the center-out "windmill"
//! - Name-based registry with case-insensitive lookup and caller-supplied
//!   custom mappers (`alloc` feature)
//! - Mapper stacks: `"U-mapper;Rotate:90"` applies several arrangements as
//!   one (`alloc` feature)
//! - `embedded-graphics` integration (`graphics` feature)
//!
//! ## Usage
//!
//! ```
//! use panelmap::{Dimensions, MapperRegistry, PixelMapper};
//!
//! // four chained 64x32 panels, folded in half into a U
//! let registry = MapperRegistry::with_defaults();
//! let mapper = match registry.find("U-mapper", 4, 1, None) {
//!     Some(mapper) => mapper,
//!     None => return,
//! };
//!
//! let matrix = Dimensions::new(256, 32);
//! let visible = match mapper.visible_dimensions(matrix) {
//!     Ok(visible) => visible,
//!     Err(_) => return,
//! };
//! assert_eq!(visible, Dimensions::new(128, 64));
//!
//! // once per pixel while rendering
//! let (x, y) = mapper.map_visible_to_matrix(matrix, 0, 0);
//! assert_eq!((x, y), (128, 0));
//! ```
//!
//! Mappers are immutable values: wiring parameters go into the constructor,
//! and every lookup returns a freshly configured value. A mapper can
//! therefore be shared between rendering threads without any locking.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error types for configuration and size mapping
pub mod error;
/// The pixel mapper abstraction
pub mod mapper;
/// Horizontal/vertical mirror mapper
pub mod mirror;
/// Quarter-turn rotation mapper
pub mod rotate;
/// U-shaped chain folding mapper
pub mod u_arrangement;
/// Vertical stacking mapper
pub mod vertical;
/// Windmill pinwheel mapper
pub mod windmill;

/// Name-based mapper registry and lookup (requires `alloc` feature)
#[cfg(feature = "alloc")]
pub mod registry;
/// Ordered composition of mappers (requires `alloc` feature)
#[cfg(feature = "alloc")]
pub mod stack;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use error::{ConfigError, SizeError};
pub use mapper::{Dimensions, PixelMapper};
pub use mirror::{MirrorAxis, MirrorMapper};
pub use rotate::{RotateMapper, Rotation};
pub use u_arrangement::UArrangementMapper;
pub use vertical::VerticalMapper;
pub use windmill::WindmillMapper;

#[cfg(feature = "alloc")]
pub use registry::MapperRegistry;
#[cfg(feature = "std")]
pub use registry::{
    available_pixel_mappers, find_pixel_mapper, find_pixel_mapper_stack, register_pixel_mapper,
};
#[cfg(feature = "alloc")]
pub use stack::MapperStack;

#[cfg(feature = "graphics")]
pub use graphics::RemappedDrawTarget;
