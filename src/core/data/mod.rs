//! Core data types for translation catalogs.
//!
//! - `message`: the catalog tree (`MessageNode`, `LocaleCatalog`, `Catalogs`)
//!   and the location types used when reporting catalog issues.

pub mod message;

pub use message::{Catalogs, LocaleCatalog, MessageContext, MessageLocation, MessageNode};
