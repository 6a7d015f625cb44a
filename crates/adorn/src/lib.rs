//! # Adorn - Decoration Syntax Rendering
//!
//! `adorn` renders value trees as decorator/attribute source syntax — the
//! metadata annotations languages attach to declarations, such as PHP 8
//! attributes (`#[Table(name: "users")]`) or docblock annotations
//! (`@Table(name="users")`).
//!
//! It is one-directional by design: values go in, source text comes out.
//! Parsing decoration syntax back, validating identifiers, or resolving
//! namespaces are all left to the caller.
//!
//! ## Core Concepts
//!
//! - [`Value`]: the closed union of renderable values — scalars, sequences,
//!   insertion-ordered mappings, and nested decorations
//! - [`Decoration`]: an immutable request pairing a name with optional
//!   content and a [`Config`]
//! - [`Syntax`]: the lexical constants of one output target, with
//!   [`attribute`](Syntax::attribute) and [`annotation`](Syntax::annotation)
//!   presets
//! - [`Renderer`]: renders requests for one syntax; [`render`] is a
//!   shorthand bound to the attribute preset
//!
//! ## Quick Start
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
//!
//! A decoration without content renders bare, and namespaced names pass
//! through verbatim:
//!
//! ```rust
//! use adorn::{render, Decoration};
//!
//! let entity = Decoration::new(r"ORM\Entity");
//! assert_eq!(render(&entity).unwrap(), r"#[ORM\Entity]");
//! ```
//!
//! ## Positional vs Named Parameters
//!
//! A mapping renders with `key: value` pairs in insertion order. A sequence
//! — or a mapping whose keys are exactly `0..n-1` — renders positionally:
//!
//! ```rust
//! use adorn::{render, Decoration, Value};
//!
//! let index = Decoration::new("Index")
//!     .with_content(Value::map([("columns", Value::seq(["email", "status"]))]));
//! assert_eq!(
//!     render(&index).unwrap(),
//!     r#"#[Index(columns: ["email", "status"])]"#
//! );
//! ```
//!
//! ## Composing Decorations
//!
//! A rendered decoration can appear inside another's parameter list; the
//! nested request is rendered by the same renderer and substituted in place:
//!
//! ```rust
//! use adorn::{Decoration, Renderer, Syntax, Value};
//!
//! let index = Decoration::new(r"ORM\Index").with_content(Value::map([
//!     ("name", Value::from("email_idx")),
//!     ("columns", Value::seq(["email"])),
//! ]));
//! let table = Decoration::new(r"ORM\Table").with_content(Value::map([
//!     ("name", Value::from("users")),
//!     ("indexes", Value::seq([index])),
//! ]));
//!
//! let annotations = Renderer::new(Syntax::annotation());
//! assert_eq!(
//!     annotations.render(&table).unwrap(),
//!     r#"@ORM\Table(name="users", indexes={@ORM\Index(name="email_idx", columns={"email"})})"#
//! );
//! ```
//!
//! ## Multiline Layout
//!
//! With [`Config::multiline`], containers with more than one entry are laid
//! out one entry per line, indented one step per nesting level:
//!
//! ```rust
//! use adorn::{render, Decoration, Value};
//!
//! let column = Decoration::new("Column")
//!     .with_content(Value::map([
//!         ("type", Value::from("string")),
//!         ("length", Value::from(255)),
//!     ]))
//!     .multiline(true);
//!
//! assert_eq!(
//!     render(&column).unwrap(),
//!     "#[Column(type: \"string\",\n    length: 255\n)]"
//! );
//! ```

pub mod decoration;
pub mod error;
pub mod prelude;
pub mod render;
pub mod syntax;
pub mod value;

pub use decoration::{Config, Decoration};
pub use error::RenderError;
pub use render::{render, Renderer};
pub use syntax::Syntax;
pub use value::{is_dense_integer_keyed, to_value, Value};
