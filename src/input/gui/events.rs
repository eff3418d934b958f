/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that a new curve snapshot is waiting in the presenter
    /// adapter. The handler still has to call `window.request_redraw()`;
    /// receiving the event alone does not repaint anything.
    Wake,
}
