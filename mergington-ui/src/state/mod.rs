//! State Management
//!
//! Page state shared by all components.

pub mod global;

pub use global::{provide_app_state, AppState};
