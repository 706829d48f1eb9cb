//! CLI command implementations.

pub mod add;
pub mod edit;
pub mod gallery;
pub mod list;
pub mod search;
pub mod status;
