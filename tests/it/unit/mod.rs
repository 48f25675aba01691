//! Unit tests for pointerkit.

mod registry_tests;
mod scroll_tests;
mod settings_tests;
