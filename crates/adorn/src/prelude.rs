//! Convenience imports for the common case.
//!
//! ```rust
//! use adorn::prelude::*;
//!
//! let entity = Decoration::new("Entity");
//! assert_eq!(render(&entity).unwrap(), "#[Entity]");
//! ```

pub use crate::decoration::{Config, Decoration};
pub use crate::error::RenderError;
pub use crate::render::{render, Renderer};
pub use crate::syntax::Syntax;
pub use crate::value::{to_value, Value};
