//! cmdpretty - human-readable shell command formatting.
//!
//! Tokenizes a command line into semantic parts (program, arguments, flags,
//! operators), decides whether it is complex enough to reformat, and
//! re-renders it across multiple lines with indentation, line-continuation
//! markers, and optional ANSI colors.

pub mod config;
pub mod heuristic;
pub mod layout;
pub mod preview;
pub mod shell;
pub mod style;

pub use config::{ConfigError, LayoutConfig};
pub use heuristic::{DEFAULT_THRESHOLD, should_prettify};
pub use layout::{Prettified, prettify, prettify_styled};
pub use preview::{Preview, PreviewOptions, preview, prettify_batch};
pub use style::Styler;
