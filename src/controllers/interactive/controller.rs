use crate::controllers::interactive::data::snapshot::{AnimationState, CurveSnapshot};
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::ports::presenter::CurvePresenterPort;
use crate::core::actions::subdivide_polyline::subdivide_polyline;
use crate::core::data::point::Point;
use crate::core::data::polyline::Polyline;
use std::sync::Arc;
use std::time::Duration;

/// Number of refinement steps before the animation restarts from the raw
/// control polygon.
pub const MAX_SUBDIVISION_STEPS: u32 = 7;

/// Cadence of the animation tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// What the shell must do after handing an event to the controller.
///
/// The controller owns no timer and never terminates the process; it
/// reports those obligations outward so it stays testable in isolation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State changed; a snapshot was presented.
    Updated,
    /// The animation began; the shell must start the recurring tick.
    AnimationStarted,
    /// State was cleared; the shell must stop the recurring tick.
    AnimationReset,
    /// The user asked to quit; the shell terminates with exit code 0.
    ExitRequested,
    /// A guard rejected the event; nothing observable happened.
    Ignored,
}

/// The interaction state machine driving the subdivision animation.
///
/// Owns the control polygon, the curve at the current animation step, and
/// the step counter. The current curve is always a fresh value derived
/// from the control polygon by `step` applications of the refinement
/// step, never an alias of it.
pub struct CurveController {
    control_points: Polyline,
    current_points: Polyline,
    step: u32,
    state: AnimationState,
    presenter_port: Arc<dyn CurvePresenterPort>,
}

impl CurveController {
    pub fn new(presenter_port: Arc<dyn CurvePresenterPort>) -> Self {
        Self {
            control_points: Polyline::new(),
            current_points: Polyline::new(),
            step: 0,
            state: AnimationState::Idle,
            presenter_port,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Transition {
        match event {
            InputEvent::AddControlPoint(point) => self.add_control_point(point),
            InputEvent::RequestStart => self.request_start(),
            InputEvent::RequestReset => self.request_reset(),
            InputEvent::RequestExit => Transition::ExitRequested,
        }
    }

    /// One periodic animation tick. Ignored while idle, so a tick that
    /// was already in flight when the state was reset cannot mutate
    /// anything.
    pub fn tick(&mut self) -> Transition {
        if self.state != AnimationState::Running {
            return Transition::Ignored;
        }

        if self.step >= MAX_SUBDIVISION_STEPS {
            self.current_points = self.control_points.clone();
            self.step = 0;
        } else {
            self.current_points = subdivide_polyline(&self.current_points);
            self.step += 1;
        }

        self.present();
        Transition::Updated
    }

    #[must_use]
    pub fn snapshot(&self) -> CurveSnapshot {
        CurveSnapshot {
            control_points: self.control_points.clone(),
            current_points: self.current_points.clone(),
            step: self.step,
            state: self.state,
        }
    }

    fn add_control_point(&mut self, point: Point) -> Transition {
        if self.state == AnimationState::Running {
            return Transition::Ignored;
        }

        self.control_points.push(point);
        self.current_points = self.control_points.clone();
        self.step = 0;

        self.present();
        Transition::Updated
    }

    fn request_start(&mut self) -> Transition {
        if self.state == AnimationState::Running || self.control_points.len() < 2 {
            return Transition::Ignored;
        }

        self.current_points = self.control_points.clone();
        self.step = 0;
        self.state = AnimationState::Running;

        self.present();
        Transition::AnimationStarted
    }

    fn request_reset(&mut self) -> Transition {
        self.control_points.clear();
        self.current_points.clear();
        self.step = 0;
        self.state = AnimationState::Idle;

        self.present();
        Transition::AnimationReset
    }

    fn present(&self) {
        self.presenter_port.present(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::subdivide_polyline::subdivide_polyline_n;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPresenterPort {
        snapshots: Mutex<Vec<CurveSnapshot>>,
    }

    impl MockPresenterPort {
        fn take_snapshots(&self) -> Vec<CurveSnapshot> {
            let mut guard = self.snapshots.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl CurvePresenterPort for MockPresenterPort {
        fn present(&self, snapshot: CurveSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot);
        }
    }

    fn controller_with_mock() -> (CurveController, Arc<MockPresenterPort>) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller =
            CurveController::new(Arc::clone(&presenter_port) as Arc<dyn CurvePresenterPort>);
        (controller, presenter_port)
    }

    fn add_points(controller: &mut CurveController, points: &[(i32, i32)]) {
        for &(x, y) in points {
            let transition =
                controller.handle_input(InputEvent::AddControlPoint(Point { x, y }));
            assert_eq!(transition, Transition::Updated);
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let (controller, _) = controller_with_mock();
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.state, AnimationState::Idle);
        assert!(snapshot.control_points.is_empty());
        assert!(snapshot.current_points.is_empty());
        assert_eq!(snapshot.step, 0);
    }

    #[test]
    fn adding_a_point_mirrors_it_into_the_current_curve() {
        let (mut controller, presenter_port) = controller_with_mock();
        add_points(&mut controller, &[(10, 20)]);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.control_points, snapshot.current_points);
        assert_eq!(snapshot.step, 0);

        let presented = presenter_port.take_snapshots();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0], snapshot);
    }

    #[test]
    fn start_requires_at_least_two_points() {
        let (mut controller, presenter_port) = controller_with_mock();

        assert_eq!(
            controller.handle_input(InputEvent::RequestStart),
            Transition::Ignored
        );

        add_points(&mut controller, &[(0, 0)]);
        assert_eq!(
            controller.handle_input(InputEvent::RequestStart),
            Transition::Ignored
        );
        assert_eq!(controller.snapshot().state, AnimationState::Idle);

        add_points(&mut controller, &[(10, 0)]);
        presenter_port.take_snapshots();
        assert_eq!(
            controller.handle_input(InputEvent::RequestStart),
            Transition::AnimationStarted
        );
        assert_eq!(controller.snapshot().state, AnimationState::Running);
        assert_eq!(presenter_port.take_snapshots().len(), 1);
    }

    #[test]
    fn starting_twice_is_ignored() {
        let (mut controller, _) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (10, 0)]);

        assert_eq!(
            controller.handle_input(InputEvent::RequestStart),
            Transition::AnimationStarted
        );
        assert_eq!(
            controller.handle_input(InputEvent::RequestStart),
            Transition::Ignored
        );
    }

    #[test]
    fn ticks_apply_the_refinement_step() {
        let (mut controller, _) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (10, 0)]);
        controller.handle_input(InputEvent::RequestStart);

        assert_eq!(controller.tick(), Transition::Updated);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.step, 1);
        assert_eq!(
            snapshot.current_points.points(),
            &[
                Point { x: 0, y: 0 },
                Point { x: 2, y: 0 },
                Point { x: 7, y: 0 },
                Point { x: 10, y: 0 },
            ]
        );
    }

    #[test]
    fn seven_ticks_then_the_loop_restarts_from_the_control_polygon() {
        let (mut controller, _) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (100, 0), (100, 100)]);
        controller.handle_input(InputEvent::RequestStart);

        for _ in 0..7 {
            controller.tick();
        }

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.step, 7);
        assert_eq!(
            snapshot.current_points,
            subdivide_polyline_n(&snapshot.control_points, 7)
        );

        // The 8th tick wraps back to the raw control polygon.
        controller.tick();
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.step, 0);
        assert_eq!(snapshot.current_points, snapshot.control_points);
        assert_eq!(snapshot.state, AnimationState::Running);
    }

    #[test]
    fn current_curve_always_equals_step_applications_of_the_engine() {
        let (mut controller, _) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (50, 80), (120, 10)]);
        controller.handle_input(InputEvent::RequestStart);

        for _ in 0..20 {
            controller.tick();
            let snapshot = controller.snapshot();
            assert_eq!(
                snapshot.current_points,
                subdivide_polyline_n(&snapshot.control_points, snapshot.step)
            );
        }
    }

    #[test]
    fn adding_points_while_running_is_ignored() {
        let (mut controller, presenter_port) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (10, 0)]);
        controller.handle_input(InputEvent::RequestStart);
        controller.tick();

        let before = controller.snapshot();
        presenter_port.take_snapshots();

        assert_eq!(
            controller.handle_input(InputEvent::AddControlPoint(Point { x: 5, y: 5 })),
            Transition::Ignored
        );
        assert_eq!(controller.snapshot(), before);
        assert!(presenter_port.take_snapshots().is_empty());
    }

    #[test]
    fn tick_while_idle_is_ignored() {
        let (mut controller, presenter_port) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (10, 0)]);
        presenter_port.take_snapshots();

        assert_eq!(controller.tick(), Transition::Ignored);
        assert_eq!(controller.snapshot().step, 0);
        assert!(presenter_port.take_snapshots().is_empty());
    }

    #[test]
    fn reset_clears_everything_from_any_state() {
        let (mut controller, _) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (10, 0), (20, 20)]);
        controller.handle_input(InputEvent::RequestStart);
        controller.tick();
        controller.tick();

        assert_eq!(
            controller.handle_input(InputEvent::RequestReset),
            Transition::AnimationReset
        );

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, AnimationState::Idle);
        assert!(snapshot.control_points.is_empty());
        assert!(snapshot.current_points.is_empty());
        assert_eq!(snapshot.step, 0);

        // A tick that was still in flight when the reset landed does nothing.
        assert_eq!(controller.tick(), Transition::Ignored);
        assert_eq!(controller.snapshot(), snapshot);
    }

    #[test]
    fn reset_on_an_idle_controller_still_reports_reset() {
        let (mut controller, _) = controller_with_mock();

        assert_eq!(
            controller.handle_input(InputEvent::RequestReset),
            Transition::AnimationReset
        );
    }

    #[test]
    fn exit_is_reported_without_touching_state() {
        let (mut controller, presenter_port) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (10, 0)]);
        let before = controller.snapshot();
        presenter_port.take_snapshots();

        assert_eq!(
            controller.handle_input(InputEvent::RequestExit),
            Transition::ExitRequested
        );
        assert_eq!(controller.snapshot(), before);
        assert!(presenter_port.take_snapshots().is_empty());
    }

    #[test]
    fn adding_a_point_after_reset_starts_a_fresh_polygon() {
        let (mut controller, _) = controller_with_mock();
        add_points(&mut controller, &[(0, 0), (10, 0)]);
        controller.handle_input(InputEvent::RequestStart);
        controller.handle_input(InputEvent::RequestReset);

        add_points(&mut controller, &[(7, 7)]);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.control_points.points(), &[Point { x: 7, y: 7 }]);
        assert_eq!(snapshot.state, AnimationState::Idle);
    }
}
