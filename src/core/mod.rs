//! Core utilities for the league history exporter
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `files`: JSON artifact naming, reading and writing
//! - `http`: Request headers for the ESPN API

pub mod files;
pub mod http;

// Re-export commonly used items for convenience
pub use files::{artifact_path, combined_path, try_read_to_string, write_json_pretty, write_string};
pub use http::espn_header_map;
