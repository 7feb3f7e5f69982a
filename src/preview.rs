//! Preview and batch helpers over the layout engine.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::heuristic::{DEFAULT_THRESHOLD, should_prettify};
use crate::layout::prettify;

/// Options for [`preview`].
#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    /// Layout settings used when a pretty rendering is produced.
    pub layout: LayoutConfig,
    /// Produce the pretty rendering (only when the decision is also true).
    pub show_pretty: bool,
}

/// A command with its prettify decision and optional rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    /// The command as given.
    pub original: String,
    /// The multi-line rendering; present only when requested and warranted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<String>,
    /// Whether the heuristic recommends reformatting.
    pub should_prettify: bool,
}

/// Inspect a command without committing to reformat it.
pub fn preview(command: &str, options: &PreviewOptions) -> Preview {
    let decision = should_prettify(command, DEFAULT_THRESHOLD);
    let pretty = if options.show_pretty && decision {
        Some(prettify(command, &options.layout))
    } else {
        None
    };
    Preview {
        original: command.to_string(),
        pretty,
        should_prettify: decision,
    }
}

/// Prettify each command with one shared configuration, preserving order.
pub fn prettify_batch<S: AsRef<str>>(commands: &[S], config: &LayoutConfig) -> Vec<String> {
    commands
        .iter()
        .map(|command| prettify(command.as_ref(), config))
        .collect()
}
