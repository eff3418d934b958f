//! Interactive controller for the subdivision animation.
//!
//! This module is the application layer between the input surface and the
//! presentation layer, following the ports & adapters pattern:
//! - **Input**: [`InputEvent`]s from the windowing adapter, plus the
//!   periodic tick delivered by the shell's timer
//! - **Output**: [`CurvePresenterPort`] receiving a [`CurveSnapshot`]
//!   after every transition
//! - **Core**: uses the pure subdivision action from `core/`

pub mod animation;
mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use animation::StepTicker;
pub use controller::{CurveController, MAX_SUBDIVISION_STEPS, TICK_PERIOD, Transition};
pub use data::{AnimationState, CurveSnapshot};
pub use events::InputEvent;
pub use ports::CurvePresenterPort;
