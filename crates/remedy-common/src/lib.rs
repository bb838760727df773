pub mod error;
pub mod source;
pub mod mcp_api;
