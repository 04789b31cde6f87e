//! Page assembly and serving for Tabulator outputs
//!
//! Builds the host page (head includes, slider controls, output elements),
//! serves it over HTTP, and answers one render cycle per output request.

pub mod assets;
pub mod error;
pub mod page;
pub mod server;

pub use page::*;
pub use server::Server;
