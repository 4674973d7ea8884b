//! Catalog file parsers.
//!
//! - `json`: JSON catalog parser (single files, message directories and the
//!   builtin site catalogs)

pub mod json;
