//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test servers over each storage backend
//! - [`fixtures`] - Test movie payloads

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
