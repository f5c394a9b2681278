//! Storage abstractions for service layer
//!
//! Contains the reusable JSON file-backed map used by the file storage backend.

pub mod json_map_store;
