//! The recursive value-to-source renderer.
//!
//! [`Renderer`] turns a [`Decoration`] into source text for one target
//! [`Syntax`]. The free [`render`] function is a shorthand bound to the
//! attribute preset.
//!
//! Rendering is a pure function of the request: no I/O, no shared state, and
//! byte-identical output for identical input. A renderer can be shared
//! freely across threads.
//!
//! # Example
//!
//! ```rust
//! use adorn::{Decoration, Renderer, Syntax, Value};
//!
//! let index = Decoration::new("Index")
//!     .with_content(Value::map([("columns", Value::seq(["email", "status"]))]));
//!
//! let attributes = Renderer::new(Syntax::attribute());
//! assert_eq!(
//!     attributes.render(&index).unwrap(),
//!     r#"#[Index(columns: ["email", "status"])]"#
//! );
//!
//! let annotations = Renderer::new(Syntax::annotation());
//! assert_eq!(
//!     annotations.render(&index).unwrap(),
//!     r#"@Index(columns={"email", "status"})"#
//! );
//! ```

use crate::decoration::{Config, Decoration};
use crate::error::RenderError;
use crate::syntax::Syntax;
use crate::value::{is_dense_integer_keyed, Value};

/// Renders decoration requests for one target syntax.
#[derive(Debug, Clone)]
pub struct Renderer {
    syntax: Syntax,
}

/// Renders a decoration in the default attribute syntax.
///
/// Equivalent to `Renderer::default().render(decoration)`.
pub fn render(decoration: &Decoration) -> Result<String, RenderError> {
    Renderer::default().render(decoration)
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(Syntax::attribute())
    }
}

impl Renderer {
    /// Creates a renderer for the given target syntax.
    pub fn new(syntax: Syntax) -> Self {
        Renderer { syntax }
    }

    /// The target syntax this renderer emits.
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Renders a decoration request to source text.
    ///
    /// A request without content renders bare: `#[Entity]`, not
    /// `#[Entity()]`. Rendering either fully succeeds or fails before any
    /// output is produced.
    pub fn render(&self, decoration: &Decoration) -> Result<String, RenderError> {
        let args = match decoration.content() {
            Some(value) => self.as_code(value, true, decoration.config())?,
            None => String::new(),
        };
        Ok(format!(
            "{}{}{}{}",
            self.syntax.prefix,
            decoration.name(),
            args,
            self.syntax.suffix
        ))
    }

    /// Renders one value. At top level a scalar becomes the sole argument
    /// and is wrapped in the argument-list delimiters; nested values are
    /// left bare for the enclosing container to delimit.
    fn as_code(&self, value: &Value, top_level: bool, config: Config) -> Result<String, RenderError> {
        match value {
            // A nested decoration is rendered by the same renderer, with its
            // own config, and substituted verbatim.
            Value::Decoration(inner) => self.render(inner),
            Value::Null => Ok(self.argument(self.syntax.null_literal.clone(), top_level)),
            Value::Bool(b) => {
                let literal = if *b {
                    &self.syntax.true_literal
                } else {
                    &self.syntax.false_literal
                };
                Ok(self.argument(literal.clone(), top_level))
            }
            Value::Int(i) => Ok(self.argument(i.to_string(), top_level)),
            Value::Float(f) => {
                if !f.is_finite() {
                    return Err(RenderError::UnsupportedValue(format!(
                        "non-finite float {}",
                        f
                    )));
                }
                Ok(self.argument(f.to_string(), top_level))
            }
            Value::Str(s) => Ok(self.argument(self.syntax.quote(s), top_level)),
            Value::Seq(items) => {
                let entries: Vec<(Option<&str>, &Value)> =
                    items.iter().map(|v| (None, v)).collect();
                self.container(&entries, false, top_level, config)
            }
            Value::Map(pairs) => {
                let use_keys = !is_dense_integer_keyed(pairs);
                let entries: Vec<(Option<&str>, &Value)> = pairs
                    .iter()
                    .map(|(k, v)| (Some(k.as_str()), v))
                    .collect();
                self.container(&entries, use_keys, top_level, config)
            }
        }
    }

    fn container(
        &self,
        entries: &[(Option<&str>, &Value)],
        use_keys: bool,
        top_level: bool,
        config: Config,
    ) -> Result<String, RenderError> {
        let mut rendered = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let code = self.as_code(value, false, config)?;
            match (use_keys, key) {
                (true, Some(key)) => {
                    rendered.push(format!("{}{}{}", key, self.syntax.key_separator, code))
                }
                _ => rendered.push(code),
            }
        }

        let multiline = config.is_multiline() && rendered.len() > 1;
        let separator = if multiline { ",\n" } else { ", " };
        let mut joined = rendered.join(separator);
        if multiline {
            joined.push('\n');
        }

        let wrapped = if top_level {
            format!("{}{}{}", self.syntax.args_open, joined, self.syntax.args_close)
        } else {
            format!("{}{}{}", self.syntax.list_open, joined, self.syntax.list_close)
        };

        Ok(if multiline {
            indent_interior(&wrapped, &self.syntax.indent)
        } else {
            wrapped
        })
    }

    fn argument(&self, code: String, top_level: bool) -> String {
        if top_level {
            format!("{}{}{}", self.syntax.args_open, code, self.syntax.args_close)
        } else {
            code
        }
    }
}

/// Indents every line of a multiline block except the first and last, which
/// carry the delimiters and stay at the enclosing indentation. Applied once
/// per container level, so nested blocks accumulate one step per level.
fn indent_interior(block: &str, indent: &str) -> String {
    let lines: Vec<&str> = block.split('\n').collect();
    let last = lines.len() - 1;
    let mut out = String::with_capacity(block.len() + indent.len() * lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            if i < last {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
    out
}
