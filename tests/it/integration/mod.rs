//! Integration tests for areaviz.
//!
//! These tests drive a manager through complete drag workflows and check
//! what ends up in the host.

mod drag_workflow_tests;
mod positioning_tests;
mod touch_tests;
