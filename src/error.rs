//! Error types for mapper configuration and size mapping
//!
//! This module defines error types for mapper construction ([`ConfigError`])
//! and for size queries that carry dimension constraints ([`SizeError`]).
//!
//! Every failure is reported where it originates; nothing is retried or
//! silently corrected, and no failure ever terminates the process.
//!
//! ## Example
//!
//! ```
//! use panelmap::{ConfigError, RotateMapper, WindmillMapper};
//!
//! // Trailing garbage in the rotation parameter
//! let result = RotateMapper::new(1, 1, Some("90deg"));
//! assert!(matches!(result, Err(ConfigError::RotationNotANumber)));
//!
//! // Windmill wiring needs exactly two parallel chains
//! let result = WindmillMapper::new(4, 1, None);
//! assert!(matches!(result, Err(ConfigError::ParallelNotTwo { parallel: 1 })));
//! ```

/// Errors that can occur when constructing a mapper
///
/// These cover malformed parameter strings and structurally invalid wiring
/// counts. A mapper value only exists once its parameters passed these checks.
#[derive(Debug)]
pub enum ConfigError {
    /// Rotation parameter did not parse fully as a decimal integer
    RotationNotANumber,
    /// Rotation angle is not a multiple of 90 degrees
    RotationNotRightAngle {
        /// Angle that was requested
        angle: i32,
    },
    /// Mirror parameter was longer than a single character
    MirrorAxisNotSingleChar,
    /// Mirror parameter was a single character, but not an axis
    UnknownMirrorAxis {
        /// Character that was passed
        axis: char,
    },
    /// Chain too short to fold in half
    ChainTooShort {
        /// Number of chained panels requested
        chain: u32,
    },
    /// Folding in half needs an even number of chained panels
    ChainNotEven {
        /// Number of chained panels requested
        chain: u32,
    },
    /// Wiring needs exactly two parallel chains
    ParallelNotTwo {
        /// Number of parallel chains requested
        parallel: u32,
    },
    /// Unrecognized character in a flag parameter
    UnknownFlag {
        /// Character that was not understood
        flag: char,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::RotationNotANumber => {
                write!(f, "rotation parameter must be a decimal number of degrees")
            }
            Self::RotationNotRightAngle { angle } => {
                write!(f, "rotation must be a multiple of 90 degrees (got {angle})")
            }
            Self::MirrorAxisNotSingleChar => {
                write!(f, "mirror parameter must be a single character 'V' or 'H'")
            }
            Self::UnknownMirrorAxis { axis } => {
                write!(f, "mirror axis must be 'V' or 'H' (got '{axis}')")
            }
            Self::ChainTooShort { chain } => {
                write!(f, "folding needs a chain of at least two panels (got {chain})")
            }
            Self::ChainNotEven { chain } => {
                write!(f, "chain must be divisible by two (got {chain})")
            }
            Self::ParallelNotTwo { parallel } => {
                write!(f, "requires exactly two parallel chains (got {parallel})")
            }
            Self::UnknownFlag { flag } => {
                write!(f, "unknown flag '{flag}' (use 'Z' and/or 'S')")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors that can occur when deriving the visible size
///
/// Construction checks the wiring counts; constraints that also involve the
/// matrix dimensions can only be checked once those are known.
#[derive(Debug)]
pub enum SizeError {
    /// Matrix height does not divide evenly over the parallel chains
    HeightNotDivisible {
        /// Matrix height in pixels
        height: u32,
        /// Number of parallel chains
        parallel: u32,
    },
}

impl core::fmt::Display for SizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::HeightNotDivisible { height, parallel } => {
                write!(
                    f,
                    "matrix height {height} must be divisible by the parallel chain count {parallel}"
                )
            }
        }
    }
}

impl core::error::Error for SizeError {}
