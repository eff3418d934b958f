use crate::controllers::interactive::{
    CurveController, InputEvent, StepTicker, TICK_PERIOD, Transition,
};
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::Instant;
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    scale_factor: f64,
    presenter: T,
    controller: CurveController,
    ticker: StepTicker,
    last_advance: Instant,
    cursor: Option<Point>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: CurveController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            ticker: StepTicker::new(TICK_PERIOD),
            last_advance: Instant::now(),
            cursor: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop; does not return until the window closes.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>, window: &'static Window) {
        let mut redraw_pending = true;

        event_loop
            .run(move |event, elwt| {
                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        let (egui_consumed, egui_repaint) =
                            self.handle_egui_window_event(window, event);
                        if egui_repaint {
                            redraw_pending = true;
                        }

                        match event {
                            WindowEvent::CloseRequested => {
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                redraw_pending = false;

                                if self.presenter.absorb_pending_snapshot() {
                                    redraw_pending = true;
                                }

                                let egui_output = self.update_ui(window);
                                self.egui_state
                                    .handle_platform_output(window, egui_output.platform_output.clone());

                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }

                                let egui_ctx = self.egui_ctx.clone();
                                if let Err(e) = self.presenter.render(egui_output, &egui_ctx) {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                self.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                self.scale_factor = *scale_factor;
                                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                self.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::CursorMoved { position, .. } => {
                                self.cursor = Some(Point {
                                    x: position.x as i32,
                                    y: position.y as i32,
                                });
                            }
                            WindowEvent::MouseInput {
                                state: ElementState::Pressed,
                                button: MouseButton::Left,
                                ..
                            } if !egui_consumed => {
                                if let Some(point) = self.cursor {
                                    self.dispatch(InputEvent::AddControlPoint(point), elwt);
                                    redraw_pending = true;
                                }
                            }
                            WindowEvent::KeyboardInput { event, .. }
                                if event.state == ElementState::Pressed && !egui_consumed =>
                            {
                                if let Some(input) = map_key(event.physical_key) {
                                    self.dispatch(input, elwt);
                                    redraw_pending = true;
                                }
                            }
                            _ => {}
                        }
                    }
                    Event::UserEvent(GuiEvent::Wake) => {
                        redraw_pending = true;
                    }
                    Event::AboutToWait => {
                        self.drive_ticks();

                        match self.ticker.time_until_next_tick() {
                            Some(wait) => {
                                elwt.set_control_flow(ControlFlow::WaitUntil(
                                    Instant::now() + wait,
                                ));
                            }
                            None => elwt.set_control_flow(ControlFlow::Wait),
                        }

                        if redraw_pending {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }

    /// Releases due animation ticks into the controller.
    fn drive_ticks(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_advance;
        self.last_advance = now;

        for _ in 0..self.ticker.advance(elapsed) {
            self.controller.tick();
        }
    }

    fn dispatch(&mut self, input: InputEvent, elwt: &winit::event_loop::EventLoopWindowTarget<GuiEvent>) {
        match self.controller.handle_input(input) {
            Transition::AnimationStarted => {
                self.last_advance = Instant::now();
                self.ticker.start();
            }
            Transition::AnimationReset => {
                self.ticker.stop();
            }
            Transition::ExitRequested => {
                elwt.exit();
            }
            Transition::Updated | Transition::Ignored => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let snapshot = self.presenter.snapshot().clone();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Chaikin's Algorithm")
                .default_pos([10.0, 10.0])
                .show(ctx, |ui| {
                    ui.label(format!("Step: {}", snapshot.step));
                    ui.label(format!(
                        "Control points: {}",
                        snapshot.control_points.len()
                    ));

                    ui.separator();
                    ui.label("Left click: add control point");
                    ui.label("Enter: start animation");
                    ui.label("Delete: reset");
                    ui.label("Escape: exit");

                    if snapshot.control_points.is_empty() {
                        ui.separator();
                        ui.colored_label(
                            egui::Color32::LIGHT_RED,
                            "Click on the canvas to place control points",
                        );
                    }
                });
        })
    }

    fn handle_egui_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

fn map_key(physical_key: PhysicalKey) -> Option<InputEvent> {
    match physical_key {
        PhysicalKey::Code(KeyCode::Enter) => Some(InputEvent::RequestStart),
        PhysicalKey::Code(KeyCode::Delete) => Some(InputEvent::RequestReset),
        PhysicalKey::Code(KeyCode::Escape) => Some(InputEvent::RequestExit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_map_to_controller_events() {
        assert_eq!(
            map_key(PhysicalKey::Code(KeyCode::Enter)),
            Some(InputEvent::RequestStart)
        );
        assert_eq!(
            map_key(PhysicalKey::Code(KeyCode::Delete)),
            Some(InputEvent::RequestReset)
        );
        assert_eq!(
            map_key(PhysicalKey::Code(KeyCode::Escape)),
            Some(InputEvent::RequestExit)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), None);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyA)), None);
    }
}
