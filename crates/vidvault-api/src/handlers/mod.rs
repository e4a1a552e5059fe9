//! Request handlers, one module per operation.

pub mod delete;
pub mod list;
pub mod serve;
pub mod status;
pub mod upload;
