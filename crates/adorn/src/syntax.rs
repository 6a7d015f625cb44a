//! Target-syntax constants.
//!
//! The rendering algorithm is fixed; everything lexical about the output —
//! delimiters, literal spellings, quoting — lives in a [`Syntax`]. Two
//! presets cover the common cases:
//!
//! - [`Syntax::attribute`] renders PHP 8 style attributes:
//!   `#[Table(name: "users")]`
//! - [`Syntax::annotation`] renders docblock annotations:
//!   `@Table(name="users", indexes={...})`
//!
//! Further targets are a matter of swapping constants:
//!
//! ```rust
//! use adorn::Syntax;
//!
//! // A Rust-flavoured attribute target with `=` separators.
//! let syntax = Syntax::attribute().with_key_separator(" = ");
//! ```

/// Lexical constants for one decoration target.
///
/// A `Syntax` is immutable once handed to a renderer; the builder-style
/// `with_*` methods consume and return the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Syntax {
    pub(crate) prefix: String,
    pub(crate) suffix: String,
    pub(crate) args_open: String,
    pub(crate) args_close: String,
    pub(crate) list_open: String,
    pub(crate) list_close: String,
    pub(crate) key_separator: String,
    pub(crate) true_literal: String,
    pub(crate) false_literal: String,
    pub(crate) null_literal: String,
    pub(crate) quote: char,
    pub(crate) escaped: Vec<char>,
    pub(crate) indent: String,
}

impl Syntax {
    /// PHP 8 attribute syntax: `#[Name(key: "value", nested: ["a", "b"])]`.
    pub fn attribute() -> Self {
        Syntax {
            prefix: "#[".to_string(),
            suffix: "]".to_string(),
            args_open: "(".to_string(),
            args_close: ")".to_string(),
            list_open: "[".to_string(),
            list_close: "]".to_string(),
            key_separator: ": ".to_string(),
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            null_literal: "null".to_string(),
            quote: '"',
            escaped: vec!['\\', '"', '\''],
            indent: "    ".to_string(),
        }
    }

    /// Docblock annotation syntax: `@Name(key="value", nested={"a", "b"})`.
    pub fn annotation() -> Self {
        Syntax {
            prefix: "@".to_string(),
            suffix: String::new(),
            args_open: "(".to_string(),
            args_close: ")".to_string(),
            list_open: "{".to_string(),
            list_close: "}".to_string(),
            key_separator: "=".to_string(),
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            null_literal: "null".to_string(),
            quote: '"',
            escaped: vec!['\\', '"', '\''],
            indent: "    ".to_string(),
        }
    }

    /// Replaces the token emitted before the decoration name.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the token emitted after the argument list.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replaces the argument-list delimiter pair used at top level.
    pub fn with_args_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.args_open = open.into();
        self.args_close = close.into();
        self
    }

    /// Replaces the delimiter pair used for nested containers.
    pub fn with_list_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.list_open = open.into();
        self.list_close = close.into();
        self
    }

    /// Replaces the token between a key and its value.
    pub fn with_key_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_separator = separator.into();
        self
    }

    /// Replaces the true/false/null literal spellings.
    pub fn with_literals(
        mut self,
        true_literal: impl Into<String>,
        false_literal: impl Into<String>,
        null_literal: impl Into<String>,
    ) -> Self {
        self.true_literal = true_literal.into();
        self.false_literal = false_literal.into();
        self.null_literal = null_literal.into();
        self
    }

    /// Replaces the string quote character and the set of characters escaped
    /// with a backslash inside string literals.
    pub fn with_quoting(mut self, quote: char, escaped: impl Into<Vec<char>>) -> Self {
        self.quote = quote;
        self.escaped = escaped.into();
        self
    }

    /// Replaces the indent unit applied to multiline blocks.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Escapes and quotes a string as a literal in this syntax.
    pub(crate) fn quote(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push(self.quote);
        for c in raw.chars() {
            if self.escaped.contains(&c) {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(self.quote);
        out
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::attribute()
    }
}
