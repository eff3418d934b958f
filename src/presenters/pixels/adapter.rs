use crate::controllers::interactive::data::snapshot::CurveSnapshot;
use crate::controllers::interactive::ports::presenter::CurvePresenterPort;
use crate::input::gui::events::GuiEvent;
use std::sync::Mutex;
use winit::event_loop::EventLoopProxy;

/// Bridges the controller's presenter port to the winit event loop:
/// stores the latest snapshot and wakes the UI thread, which pulls it on
/// the next redraw. Only the newest snapshot matters, so older unread
/// ones are simply overwritten.
pub struct CurveSnapshotAdapter {
    snapshot: Mutex<Option<CurveSnapshot>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl CurvePresenterPort for CurveSnapshotAdapter {
    fn present(&self, snapshot: CurveSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl CurveSnapshotAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            snapshot: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_snapshot(&self) -> Option<CurveSnapshot> {
        self.snapshot.lock().unwrap().take()
    }
}
