pub mod snapshot;

pub use snapshot::{AnimationState, CurveSnapshot};
