//! Translation engine.
//!
//! ## Module Structure
//!
//! - `data`: catalog tree types
//! - `parsers`: catalog loading (JSON files, builtin catalogs)
//! - `interpolate`: `{name}` placeholder substitution
//! - `resolve`: dotted-key lookup with fallback to the key
//! - `language`: the session's active language and its persistence
//! - `context`: per-invocation setup from config and CLI overrides

pub mod context;
pub mod data;
pub mod interpolate;
pub mod language;
pub mod parsers;
pub mod resolve;

pub use data::{Catalogs, LocaleCatalog, MessageContext, MessageLocation, MessageNode};
pub use interpolate::{Param, Params};
pub use language::LanguageState;
pub use resolve::{Translator, resolve};
