//! Line-accumulation layout engine.
//!
//! Re-renders a classified command across multiple lines: operators keep
//! their place at the end of the line of the command they follow, arguments
//! wrap under a width budget with a trailing `\` continuation marker, and
//! flags can be forced onto their own lines.

use crate::config::LayoutConfig;
use crate::shell::{ClassifiedPart, PartKind, classify, tokenize};
use crate::style::Styler;

/// Outcome of one prettify call.
///
/// The default contract flattens all three to the inner string; the enum is
/// for callers that want to know whether anything actually happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prettified {
    /// Reformatted across multiple lines.
    Formatted(String),
    /// Fit the width budget (or had nothing to lay out); returned as-is.
    Unchanged(String),
    /// Tokenization failed; the original is returned untouched.
    Degraded(String),
}

impl Prettified {
    pub fn as_str(&self) -> &str {
        match self {
            Prettified::Formatted(s) | Prettified::Unchanged(s) | Prettified::Degraded(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Prettified::Formatted(s) | Prettified::Unchanged(s) | Prettified::Degraded(s) => s,
        }
    }

    /// Check if the command was actually reformatted.
    pub fn was_formatted(&self) -> bool {
        matches!(self, Prettified::Formatted(_))
    }
}

/// Prettify a command using the environment's color capability.
///
/// Best-effort: malformed input (unbalanced quotes, trailing escape) yields
/// the original string, indistinguishable from the already-short case.
pub fn prettify(command: &str, config: &LayoutConfig) -> String {
    let styler = if config.disable_colors {
        Styler::disabled()
    } else {
        Styler::from_env()
    };
    prettify_styled(command, config, &styler).into_string()
}

/// Prettify with an explicit styler, keeping the detailed outcome.
///
/// `disable_colors` still wins over an enabled styler.
pub fn prettify_styled(command: &str, config: &LayoutConfig, styler: &Styler) -> Prettified {
    // Short commands are already readable; skip tokenization entirely.
    // This check is on the original string, not a re-rendered one.
    if command.chars().count() <= config.max_width {
        return Prettified::Unchanged(command.to_string());
    }

    let tokens = match tokenize(command) {
        Ok(tokens) => tokens,
        Err(_) => return Prettified::Degraded(command.to_string()),
    };
    let parts = classify(&tokens);
    if parts.is_empty() {
        return Prettified::Unchanged(command.to_string());
    }

    let styler = if config.disable_colors {
        Styler::disabled()
    } else {
        *styler
    };
    Prettified::Formatted(render(&parts, config, &styler).join("\n"))
}

fn render(parts: &[ClassifiedPart], config: &LayoutConfig, styler: &Styler) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < parts.len() {
        let part = &parts[i];
        match part.kind {
            // A command head always starts a fresh line segment.
            PartKind::Command => {
                current = styler.command(&part.value);
            }
            PartKind::Operator => {
                let rendered = styler.operator(&part.value);
                match part.value.as_str() {
                    // Operator stays on the line of the command it follows;
                    // the next command starts a new line.
                    "&&" | "||" | "|" => {
                        current.push(' ');
                        current.push_str(&rendered);
                        lines.push(std::mem::take(&mut current));
                    }
                    // Semicolon hugs the preceding token.
                    ";" => {
                        current.push_str(&rendered);
                        lines.push(std::mem::take(&mut current));
                    }
                    // Unrecognized operator: keep it inline.
                    _ => {
                        current.push(' ');
                        current.push_str(&rendered);
                    }
                }
            }
            PartKind::Argument => {
                let rendered = styler.argument(part);
                if config.flags_on_new_line && part.is_option() {
                    if current.is_empty() {
                        // No orphaned continuation marker before any content
                        append_word(&mut current, &rendered);
                    } else {
                        break_line(&mut lines, &mut current, &config.indent, &rendered);
                    }
                } else {
                    if !current.is_empty()
                        && width(&current) + 1 + width(&rendered) > config.max_width
                    {
                        break_line(&mut lines, &mut current, &config.indent, &rendered);
                    } else {
                        append_word(&mut current, &rendered);
                    }

                    // A long option's bare value stays with the option: when
                    // the value would overflow the budget, break before it
                    // and consume it here.
                    if part.is_long_option {
                        if let Some(next) = parts.get(i + 1) {
                            if next.kind == PartKind::Argument && !next.is_option() {
                                let next_rendered = styler.argument(next);
                                if width(&current) + width(&next_rendered) > config.max_width {
                                    break_line(
                                        &mut lines,
                                        &mut current,
                                        &config.indent,
                                        &next_rendered,
                                    );
                                    i += 1;
                                }
                            }
                        }
                    }
                }
            }
        }
        i += 1;
    }

    // Final line carries no continuation marker
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Width is over the rendered text, ANSI codes included; only the initial
// short-circuit measures the raw command.
fn width(s: &str) -> usize {
    s.chars().count()
}

fn append_word(current: &mut String, rendered: &str) {
    if !current.is_empty() {
        current.push(' ');
    }
    current.push_str(rendered);
}

/// Emit the current line with a trailing continuation marker and start the
/// next one with the indent prefix.
fn break_line(lines: &mut Vec<String>, current: &mut String, indent: &str, rendered: &str) {
    let line = std::mem::take(current);
    lines.push(format!("{line} \\"));
    current.push_str(indent);
    current.push_str(rendered);
}
