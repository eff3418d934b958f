use crate::core::data::point::Point;

/// Discrete input events produced by the display/input surface.
///
/// The periodic animation tick is not an input event; it is delivered
/// through [`CurveController::tick`](crate::controllers::interactive::CurveController::tick)
/// by whatever timer the shell runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    AddControlPoint(Point),
    RequestStart,
    RequestReset,
    RequestExit,
}
