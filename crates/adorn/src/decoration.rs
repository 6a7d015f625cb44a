//! Decoration requests and rendering options.
//!
//! A [`Decoration`] pairs a name with optional content and a [`Config`].
//! It is immutable once built: rendering is a pure function of the request,
//! and the same request renders to the same string every time.
//!
//! ```rust
//! use adorn::{render, Decoration, Value};
//!
//! let table = Decoration::new("Table").with_content(Value::map([
//!     ("name", "users"),
//!     ("schema", "public"),
//! ]));
//!
//! assert_eq!(
//!     render(&table).unwrap(),
//!     r#"#[Table(name: "users", schema: "public")]"#
//! );
//! ```

use crate::error::RenderError;
use crate::value::Value;

/// Rendering options for one decoration request.
///
/// The only recognized option is `multiline`: when set, containers with more
/// than one entry are laid out one entry per line. Unknown options never get
/// as far as the renderer — [`Config::from_pairs`] rejects them up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    multiline: bool,
}

impl Config {
    /// Creates a config with all options at their defaults.
    pub fn new() -> Self {
        Config::default()
    }

    /// Lays out containers with more than one entry one entry per line.
    pub fn multiline(mut self, on: bool) -> Self {
        self.multiline = on;
        self
    }

    /// Whether multiline layout is requested.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Builds a config from dynamically supplied option pairs, as a value
    /// producer driven by external configuration would.
    ///
    /// Fails with [`RenderError::InvalidOption`] on the first unrecognized
    /// key or mistyped value, before any rendering happens.
    ///
    /// ```rust
    /// use adorn::{Config, Value};
    ///
    /// let config = Config::from_pairs([("multiline", Value::Bool(true))]).unwrap();
    /// assert!(config.is_multiline());
    ///
    /// assert!(Config::from_pairs([("wrap", Value::Bool(true))]).is_err());
    /// ```
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut config = Config::default();
        for (key, value) in pairs {
            match (key.as_ref(), value) {
                ("multiline", Value::Bool(on)) => config.multiline = on,
                ("multiline", other) => {
                    return Err(RenderError::InvalidOption(format!(
                        "multiline expects a boolean, got {}",
                        other.kind()
                    )))
                }
                (unknown, _) => return Err(RenderError::InvalidOption(unknown.to_string())),
            }
        }
        Ok(config)
    }
}

/// A request to render one decoration.
///
/// `name` is emitted verbatim — it may carry a namespace path such as
/// `ORM\Entity`; the renderer never parses or validates it. Content is
/// optional: a decoration without content renders bare, with no parameter
/// list at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    name: String,
    content: Option<Value>,
    config: Config,
}

impl Decoration {
    /// Creates a bare decoration request with no content.
    pub fn new(name: impl Into<String>) -> Self {
        Decoration {
            name: name.into(),
            content: None,
            config: Config::default(),
        }
    }

    /// Sets the content rendered as the parameter list.
    pub fn with_content(mut self, content: impl Into<Value>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Replaces the whole config.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Shorthand for toggling multiline layout.
    pub fn multiline(mut self, on: bool) -> Self {
        self.config = self.config.multiline(on);
        self
    }

    /// The decoration name, as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The content, if any.
    pub fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    /// The rendering options.
    pub fn config(&self) -> Config {
        self.config
    }
}
