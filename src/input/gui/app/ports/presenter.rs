use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::data::snapshot::CurveSnapshot;
use crate::controllers::interactive::ports::presenter::CurvePresenterPort;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self;

    /// The thread-safe half the controller presents snapshots into.
    fn share_adapter(&self) -> Arc<dyn CurvePresenterPort>;

    /// Pulls the newest snapshot out of the adapter, if one arrived.
    /// Returns whether the displayed snapshot changed.
    fn absorb_pending_snapshot(&mut self) -> bool;

    /// The snapshot currently on display (default-empty before the first
    /// presentation).
    fn snapshot(&self) -> &CurveSnapshot;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32);
}
