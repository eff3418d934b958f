mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::render_curve::CliCurveController;
pub use controllers::interactive::{
    AnimationState, CurveController, CurvePresenterPort, CurveSnapshot, InputEvent,
    MAX_SUBDIVISION_STEPS, StepTicker, TICK_PERIOD, Transition,
};
pub use crate::core::actions::subdivide_polyline::{subdivide_polyline, subdivide_polyline_n};
pub use crate::core::data::point::Point;
pub use crate::core::data::polyline::Polyline;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
