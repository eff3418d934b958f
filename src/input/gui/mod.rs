//! GUI input adapter for the interactive curve editor.
//!
//! Provides a windowed interface using winit for window management and
//! input, pixels for framebuffer rendering, and egui for the status
//! overlay.

pub mod app;
pub mod commands;
pub mod events;
