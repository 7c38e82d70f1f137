//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary, reducing linking
//! overhead.
//!
//! Structure:
//! - helpers: Shared builders and event constructors
//! - integration: Multi-step drag workflows against the headless host
//! - unit: Single-component tests through the public API

mod integration;
