//! Semantic classification of shell tokens for display.

use super::tokenizer::Token;

/// Semantic category of a classified part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// The program at the head of a command (or of a chained sub-command).
    Command,
    /// Any other word: positional argument, flag, or flag value.
    Argument,
    /// A control operator between commands.
    Operator,
}

/// One token with its display classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPart {
    pub kind: PartKind,
    pub value: String,
    /// Value starts with `--`.
    pub is_long_option: bool,
    /// Value starts with a single `-`, is longer than `-` alone, and is not
    /// a negative number like `-5`.
    pub is_short_option: bool,
}

impl ClassifiedPart {
    fn new(kind: PartKind, value: &str) -> Self {
        let is_long_option = value.starts_with("--");
        let is_short_option = !is_long_option
            && value.starts_with('-')
            && value.len() > 1
            && !value[1..].starts_with(|c: char| c.is_ascii_digit());
        Self {
            kind,
            value: value.to_string(),
            is_long_option,
            is_short_option,
        }
    }

    /// True for both long and short options.
    pub fn is_option(&self) -> bool {
        self.is_long_option || self.is_short_option
    }
}

/// Classify tokens into command heads, arguments, and operators.
///
/// The first non-operator token is the command head; every non-operator
/// token after an operator starts a new head (`a && b` has two).
pub fn classify(tokens: &[Token]) -> Vec<ClassifiedPart> {
    let mut parts = Vec::with_capacity(tokens.len());
    let mut expect_command = true;

    for token in tokens {
        match token {
            Token::Control(op) => {
                parts.push(ClassifiedPart::new(PartKind::Operator, op.as_str()));
                expect_command = true;
            }
            Token::Word { text, .. } => {
                let kind = if expect_command {
                    PartKind::Command
                } else {
                    PartKind::Argument
                };
                parts.push(ClassifiedPart::new(kind, text));
                expect_command = false;
            }
        }
    }

    parts
}
