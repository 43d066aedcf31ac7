#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Traits for the video source, the display window and the filter library.
pub mod backend;

/// Code fragment generation.
pub mod codegen;

/// Operator commands and key bindings.
pub mod command;

/// Error types for the cvscope crate.
pub mod error;

/// Filter kinds, slider tables and validated configurations.
pub mod filter;

/// Discrete option tables and the cyclic cursor over them.
pub mod options;

/// Slider-backed parameters and their validation.
pub mod params;

/// The interactive capture, filter and display loop.
pub mod session;

/// Video source selection.
pub mod source;

/// Pure slider correction rules.
pub mod validate;

/// OpenCV capture, HighGUI window and filter calls (feature-gated).
///
/// Requires the `opencv` feature flag and a system OpenCV installation.
#[cfg(feature = "opencv")]
pub mod opencv;

pub use error::ScopeError;
pub use filter::{FilterConfig, FilterKind};
pub use session::{ExitReason, FilterSession, SessionConfig, SessionState};
pub use source::SourceSpec;
