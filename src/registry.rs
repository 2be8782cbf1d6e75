//! Name-based mapper registry and lookup
//!
//! A [`MapperRegistry`] resolves a case-folded mapper name plus wiring
//! parameters into a ready-to-use [`PixelMapper`] value. Lookups construct a
//! fresh mapper every time, so nothing handed out is ever reconfigured
//! behind a caller's back.
//!
//! [`with_defaults`](MapperRegistry::with_defaults) registers the five
//! built-in mappers; [`register`](MapperRegistry::register) adds custom
//! ones. With the `std` feature a process-wide default registry is available
//! through [`register_pixel_mapper`], [`available_pixel_mappers`] and
//! [`find_pixel_mapper`].
//!
//! ## Example
//!
//! ```
//! use panelmap::{Dimensions, MapperRegistry, PixelMapper};
//!
//! let registry = MapperRegistry::with_defaults();
//! let mapper = match registry.find("rotate", 1, 1, Some("90")) {
//!     Some(mapper) => mapper,
//!     None => return,
//! };
//! let matrix = Dimensions::new(64, 32);
//! assert_eq!(mapper.map_visible_to_matrix(matrix, 0, 0), (63, 0));
//! ```

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::error;

use crate::error::ConfigError;
use crate::mapper::PixelMapper;
use crate::mirror::MirrorMapper;
use crate::rotate::RotateMapper;
use crate::stack::MapperStack;
use crate::u_arrangement::UArrangementMapper;
use crate::vertical::VerticalMapper;
use crate::windmill::WindmillMapper;

struct RegisteredMapper {
    display_name: String,
    construct:
        Box<dyn Fn(u32, u32, Option<&str>) -> Result<Box<dyn PixelMapper>, ConfigError> + Send + Sync>,
}

/// Registry of mapper constructors, keyed by case-folded name
///
/// A constructible value: tests can instantiate their own, production code
/// usually goes through the process-wide default (`std` feature). Entries
/// are added at setup time and never removed; registering a name twice
/// silently replaces the earlier entry.
pub struct MapperRegistry {
    mappers: BTreeMap<String, RegisteredMapper>,
}

impl MapperRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            mappers: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in mappers registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("Rotate", |chain, parallel, param| {
            Ok(Box::new(RotateMapper::new(chain, parallel, param)?))
        });
        registry.register("U-mapper", |chain, parallel, param| {
            Ok(Box::new(UArrangementMapper::new(chain, parallel, param)?))
        });
        registry.register("V-mapper", |chain, parallel, param| {
            Ok(Box::new(VerticalMapper::new(chain, parallel, param)?))
        });
        registry.register("Windmill", |chain, parallel, param| {
            Ok(Box::new(WindmillMapper::new(chain, parallel, param)?))
        });
        registry.register("Mirror", |chain, parallel, param| {
            Ok(Box::new(MirrorMapper::new(chain, parallel, param)?))
        });
        registry
    }

    /// Register a mapper constructor under a display name
    ///
    /// The name is case-folded for lookup; the display form is what
    /// [`names`](MapperRegistry::names) reports. The last registration for a
    /// given name wins.
    pub fn register<F>(&mut self, display_name: &str, construct: F)
    where
        F: Fn(u32, u32, Option<&str>) -> Result<Box<dyn PixelMapper>, ConfigError>
            + Send
            + Sync
            + 'static,
    {
        self.mappers.insert(
            display_name.to_lowercase(),
            RegisteredMapper {
                display_name: display_name.to_string(),
                construct: Box::new(construct),
            },
        );
    }

    /// All registered display names, ordered by their case-folded form
    pub fn names(&self) -> Vec<&str> {
        self.mappers
            .values()
            .map(|mapper| mapper.display_name.as_str())
            .collect()
    }

    /// Look up a mapper by name and configure it with wiring parameters
    ///
    /// The lookup is case-insensitive. Returns `None` both for an unknown
    /// name and for rejected parameters; a one-line diagnostic on the error
    /// stream tells the two apart.
    pub fn find(
        &self,
        name: &str,
        chain: u32,
        parallel: u32,
        param: Option<&str>,
    ) -> Option<Box<dyn PixelMapper>> {
        let Some(entry) = self.mappers.get(&name.to_lowercase()) else {
            error!("{name}: no such mapper");
            return None;
        };
        match (entry.construct)(chain, parallel, param) {
            Ok(mapper) => Some(mapper),
            Err(err) => {
                error!("{}: {err}", entry.display_name);
                None
            }
        }
    }

    /// Build a [`MapperStack`] from a `;`-separated list of mappers
    ///
    /// Each entry is a name with an optional `:`-separated parameter, e.g.
    /// `"U-mapper;Rotate:90"`. Entries apply hardware-outward in list order:
    /// the first entry sees the physical matrix, the last one defines the
    /// space the application draws into. Empty entries are skipped; an
    /// unknown name or rejected parameter yields `None` after a diagnostic.
    pub fn find_all(&self, config: &str, chain: u32, parallel: u32) -> Option<MapperStack> {
        let mut stack = MapperStack::new();
        for part in config.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (name, param) = match part.split_once(':') {
                Some((name, param)) => (name, Some(param)),
                None => (part, None),
            };
            stack.push(self.find(name, chain, parallel, param)?);
        }
        Some(stack)
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(feature = "std")]
mod default_instance {
    use std::sync::{Mutex, PoisonError};

    use once_cell::sync::Lazy;

    use super::{Box, ConfigError, MapperRegistry, MapperStack, PixelMapper, String, Vec};

    static DEFAULT_REGISTRY: Lazy<Mutex<MapperRegistry>> =
        Lazy::new(|| Mutex::new(MapperRegistry::with_defaults()));

    /// Add or replace a mapper in the process-wide default registry
    ///
    /// Intended for single-threaded setup, before rendering starts.
    pub fn register_pixel_mapper<F>(display_name: &str, construct: F)
    where
        F: Fn(u32, u32, Option<&str>) -> Result<Box<dyn PixelMapper>, ConfigError>
            + Send
            + Sync
            + 'static,
    {
        DEFAULT_REGISTRY
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .register(display_name, construct);
    }

    /// Display names registered in the process-wide default registry
    pub fn available_pixel_mappers() -> Vec<String> {
        let registry = DEFAULT_REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        registry.names().into_iter().map(String::from).collect()
    }

    /// Look up and configure a mapper in the process-wide default registry
    ///
    /// See [`MapperRegistry::find`] for the lookup and diagnostic behavior.
    pub fn find_pixel_mapper(
        name: &str,
        chain: u32,
        parallel: u32,
        param: Option<&str>,
    ) -> Option<Box<dyn PixelMapper>> {
        DEFAULT_REGISTRY
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .find(name, chain, parallel, param)
    }

    /// Build a mapper stack from the process-wide default registry
    ///
    /// See [`MapperRegistry::find_all`] for the list syntax.
    pub fn find_pixel_mapper_stack(
        config: &str,
        chain: u32,
        parallel: u32,
    ) -> Option<MapperStack> {
        DEFAULT_REGISTRY
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .find_all(config, chain, parallel)
    }
}

#[cfg(feature = "std")]
pub use default_instance::{
    available_pixel_mappers, find_pixel_mapper, find_pixel_mapper_stack, register_pixel_mapper,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SizeError;
    use crate::mapper::Dimensions;

    /// Forwards coordinates untouched; stands in for a caller-supplied mapper.
    struct NullMapper;

    impl PixelMapper for NullMapper {
        fn name(&self) -> &str {
            "Null"
        }

        fn visible_dimensions(&self, matrix: Dimensions) -> Result<Dimensions, SizeError> {
            Ok(matrix)
        }

        fn map_visible_to_matrix(&self, _matrix: Dimensions, x: u32, y: u32) -> (u32, u32) {
            (x, y)
        }
    }

    #[test]
    fn test_names_are_ordered_by_folded_key() {
        let registry = MapperRegistry::with_defaults();
        assert_eq!(
            registry.names(),
            ["Mirror", "Rotate", "U-mapper", "V-mapper", "Windmill"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = MapperRegistry::with_defaults();
        for name in ["Rotate", "ROTATE", "rotate", "rOtAtE"] {
            let mapper = registry.find(name, 1, 1, Some("90")).unwrap();
            assert_eq!(mapper.name(), "Rotate");
        }
    }

    #[test]
    fn test_unknown_name_returns_none() {
        let registry = MapperRegistry::with_defaults();
        assert!(registry.find("Spiral", 1, 1, None).is_none());
    }

    #[test]
    fn test_rejected_parameters_return_none() {
        let registry = MapperRegistry::with_defaults();
        // odd chain cannot fold
        assert!(registry.find("U-mapper", 3, 1, None).is_none());
        // windmill needs two parallel chains
        assert!(registry.find("Windmill", 4, 1, None).is_none());
        // bad rotation angle
        assert!(registry.find("Rotate", 1, 1, Some("45")).is_none());
    }

    #[test]
    fn test_found_mapper_is_configured() {
        let registry = MapperRegistry::with_defaults();
        let mapper = registry.find("U-mapper", 4, 1, None).unwrap();
        let visible = mapper
            .visible_dimensions(Dimensions::new(128, 32))
            .unwrap();
        assert_eq!(visible, Dimensions::new(64, 64));
    }

    #[test]
    fn test_custom_mapper_registers_and_resolves() {
        let mut registry = MapperRegistry::with_defaults();
        registry.register("Null", |_, _, _| Ok(Box::new(NullMapper)));
        let mapper = registry.find("null", 1, 1, None).unwrap();
        assert_eq!(mapper.name(), "Null");
        assert!(registry.names().contains(&"Null"));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = MapperRegistry::with_defaults();
        registry.register("Rotate", |_, _, _| Ok(Box::new(NullMapper)));
        let mapper = registry.find("Rotate", 1, 1, None).unwrap();
        assert_eq!(mapper.name(), "Null");
        // still a single entry under the folded key
        assert_eq!(registry.names().len(), 5);
    }

    #[test]
    fn test_find_all_builds_a_stack_in_list_order() {
        let registry = MapperRegistry::with_defaults();
        let stack = registry.find_all("U-mapper;Rotate:90", 4, 1).unwrap();
        assert_eq!(stack.len(), 2);

        let matrix = Dimensions::new(128, 32);
        let visible = stack.visible_dimensions(matrix).unwrap();
        // fold to 64x64, then a square quarter turn
        assert_eq!(visible, Dimensions::new(64, 64));
    }

    #[test]
    fn test_find_all_skips_empty_entries() {
        let registry = MapperRegistry::with_defaults();
        let stack = registry.find_all("; Mirror:V ;", 1, 1).unwrap();
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_find_all_fails_on_unknown_entry() {
        let registry = MapperRegistry::with_defaults();
        assert!(registry.find_all("Mirror;Spiral", 1, 1).is_none());
        assert!(registry.find_all("Rotate:45", 1, 1).is_none());
    }

    #[test]
    fn test_empty_config_is_an_identity_stack() {
        let registry = MapperRegistry::with_defaults();
        let stack = registry.find_all("", 1, 1).unwrap();
        assert!(stack.is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_default_registry_has_builtins() {
        let names = available_pixel_mappers();
        for name in ["Mirror", "Rotate", "U-mapper", "V-mapper", "Windmill"] {
            assert!(names.iter().any(|n| n == name));
        }

        let mapper = find_pixel_mapper("rotate", 1, 1, None).unwrap();
        assert_eq!(mapper.name(), "Rotate");
        assert!(find_pixel_mapper("Spiral", 1, 1, None).is_none());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_default_registry_accepts_custom_mappers() {
        register_pixel_mapper("Passthrough", |_, _, _| Ok(Box::new(NullMapper)));
        let mapper = find_pixel_mapper("passthrough", 1, 1, None).unwrap();
        assert_eq!(mapper.name(), "Null");

        let stack = find_pixel_mapper_stack("Passthrough;Rotate:180", 1, 1).unwrap();
        assert_eq!(stack.len(), 2);
    }
}
