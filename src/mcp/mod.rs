//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes translation lookup, language switching and catalog checks to AI
//! assistants over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Context setup and result encoding shared by the tools
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and result DTOs

mod helpers;
mod server;
pub mod types;

pub use server::{IsimMcpServer, run_server};
