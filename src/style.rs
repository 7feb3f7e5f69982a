//! ANSI styling for rendered command parts.

use crate::shell::ClassifiedPart;
use std::io::{IsTerminal, Write};
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Injected color capability plus the display palette.
///
/// Construct with [`Styler::from_env`] at the public entry point, or force
/// either branch with [`Styler::new`] for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Detect color capability from the environment: disabled when NO_COLOR
    /// is set, TERM is dumb, or stdout is not a terminal.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::disabled();
        }
        if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
            return Self::disabled();
        }
        Self::new(std::io::stdout().is_terminal())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Render a command head (bold cyan).
    pub fn command(&self, text: &str) -> String {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        self.paint(text, &spec)
    }

    /// Render a control operator (bold yellow).
    pub fn operator(&self, text: &str) -> String {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        self.paint(text, &spec)
    }

    /// Render an argument: flags are green, plain values go through the
    /// value rules, everything else is left unstyled.
    pub fn argument(&self, part: &ClassifiedPart) -> String {
        if part.is_option() {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Green));
            return self.paint(&part.value, &spec);
        }
        match value_spec(&part.value) {
            Some(spec) => self.paint(&part.value, &spec),
            None => part.value.clone(),
        }
    }

    fn paint(&self, text: &str, spec: &ColorSpec) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let mut buf = Ansi::new(Vec::new());
        if buf.set_color(spec).is_err() || write!(buf, "{text}").is_err() || buf.reset().is_err() {
            return text.to_string();
        }
        String::from_utf8(buf.into_inner()).unwrap_or_else(|_| text.to_string())
    }
}

/// Style for a plain argument value; the first matching rule wins.
///
/// The path rule runs before the URL rule, so any URL containing a slash is
/// styled as a path. The URL arm only catches slash-free prefixes.
fn value_spec(value: &str) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    if value.contains('/') || value.contains('\\') {
        spec.set_fg(Some(Color::Blue));
        Some(spec)
    } else if value.contains('=') {
        spec.set_fg(Some(Color::Magenta));
        Some(spec)
    } else if value.starts_with("http://") || value.starts_with("https://") {
        spec.set_fg(Some(Color::Blue)).set_underline(true);
        Some(spec)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{PartKind, classify, tokenize};

    fn part(command: &str, index: usize) -> ClassifiedPart {
        classify(&tokenize(command).unwrap())[index].clone()
    }

    #[test]
    fn test_disabled_returns_plain_text() {
        let styler = Styler::disabled();
        assert_eq!(styler.command("git"), "git");
        assert_eq!(styler.operator("&&"), "&&");
        assert_eq!(styler.argument(&part("git --verbose", 1)), "--verbose");
    }

    #[test]
    fn test_enabled_wraps_in_ansi() {
        let styler = Styler::new(true);
        let painted = styler.command("git");
        assert!(painted.contains("\x1b["));
        assert!(painted.contains("git"));
        assert_ne!(painted, "git");
    }

    #[test]
    fn test_flags_are_styled() {
        let styler = Styler::new(true);
        assert!(styler.argument(&part("ls -la", 1)).contains("\x1b["));
        assert!(styler.argument(&part("ls --all", 1)).contains("\x1b["));
    }

    #[test]
    fn test_plain_word_is_unstyled_even_when_enabled() {
        let styler = Styler::new(true);
        assert_eq!(styler.argument(&part("git commit", 1)), "commit");
    }

    #[test]
    fn test_path_rule() {
        assert!(value_spec("src/main.rs").is_some());
        assert!(value_spec("C:\\Users").is_some());
        assert!(value_spec("plain").is_none());
    }

    #[test]
    fn test_key_value_rule() {
        let spec = value_spec("ENV=prod").unwrap();
        assert_eq!(spec.fg(), Some(&Color::Magenta));
    }

    #[test]
    fn test_path_rule_beats_key_value() {
        // "dir/ENV=prod" contains a slash, so the path rule wins
        let spec = value_spec("dir/ENV=prod").unwrap();
        assert_eq!(spec.fg(), Some(&Color::Blue));
    }

    #[test]
    fn test_url_is_shadowed_by_path_rule() {
        // URLs contain slashes, so they style as paths, not underlined
        let spec = value_spec("https://example.com/x").unwrap();
        assert_eq!(spec.fg(), Some(&Color::Blue));
        assert!(!spec.underline());
    }

    #[test]
    fn test_operator_part_classification() {
        let p = part("a && b", 1);
        assert_eq!(p.kind, PartKind::Operator);
        assert_eq!(Styler::disabled().operator(&p.value), "&&");
    }
}
