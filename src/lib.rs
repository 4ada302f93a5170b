//! mcp-client bundle updater
//!
//! Downloads the latest `@portofcontext/mcp-client` build from the CDN into
//! `crates/sdk_runner/js/mcp-client.min.mjs`.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

#[cfg(test)]
mod test_support;
