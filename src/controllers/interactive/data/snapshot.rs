use crate::core::data::polyline::Polyline;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
}

/// A fresh read model of the controller, handed to the presenter after
/// every effectful transition. The polylines are owned copies; presenting
/// never aliases the controller's own buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveSnapshot {
    pub control_points: Polyline,
    pub current_points: Polyline,
    pub step: u32,
    pub state: AnimationState,
}

impl Default for CurveSnapshot {
    fn default() -> Self {
        Self {
            control_points: Polyline::new(),
            current_points: Polyline::new(),
            step: 0,
            state: AnimationState::Idle,
        }
    }
}
