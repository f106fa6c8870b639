//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Endpoint, nickname, length cap, and post text tests
//! - `loading`: End-to-end loading from environment and CLI arguments

mod helpers;
