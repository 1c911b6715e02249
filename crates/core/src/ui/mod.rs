//! Shared UI components for desktop and WASM
//! 
//! This module provides platform-agnostic UI rendering using egui.
//! Platform-specific details (image loading, storage) stay in the shells.

mod style;
mod charts;
mod box_modal;
mod gamification_panel;
mod payment_form;
mod auth_forms;
mod dashboard;

pub use style::*;
pub use charts::*;
pub use box_modal::*;
pub use gamification_panel::*;
pub use payment_form::*;
pub use auth_forms::*;
pub use dashboard::*;
