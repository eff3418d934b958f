//! Port definitions for the interactive controller.
//!
//! Trait definitions that decouple the controller from the presentation
//! layer; adapters live under `presenters/`.

pub mod presenter;

pub use presenter::CurvePresenterPort;
