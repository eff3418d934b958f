use crate::controllers::interactive::data::snapshot::CurveSnapshot;
use crate::controllers::interactive::ports::presenter::CurvePresenterPort;
use crate::core::actions::rasterize_curve::rasterize_curve;
use crate::core::data::canvas::Canvas;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::CurveSnapshotAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<CurveSnapshotAdapter>,
    width: u32,
    height: u32,
    snapshot: CurveSnapshot,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(CurveSnapshotAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            snapshot: CurveSnapshot::default(),
        }
    }

    fn share_adapter(&self) -> Arc<dyn CurvePresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn CurvePresenterPort>
    }

    fn absorb_pending_snapshot(&mut self) -> bool {
        match self.adapter.take_snapshot() {
            Some(snapshot) => {
                self.snapshot = snapshot;
                true
            }
            None => false,
        }
    }

    fn snapshot(&self) -> &CurveSnapshot {
        &self.snapshot
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.absorb_pending_snapshot();
        self.draw_curve_frame();
        self.render_with_overlay(egui_output, egui_ctx)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");

        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");
    }
}

impl PixelsPresenter {
    /// Rasterizes the latest snapshot and copies the RGB canvas into the
    /// RGBA pixels framebuffer.
    fn draw_curve_frame(&mut self) {
        let canvas: Canvas = match rasterize_curve(
            &self.snapshot.control_points,
            &self.snapshot.current_points,
            self.width,
            self.height,
        ) {
            Ok(canvas) => canvas,
            // Minimized window; nothing to draw into.
            Err(_) => return,
        };

        let frame = self.pixels.frame_mut();
        for (src_pixel, dst_pixel) in canvas
            .data()
            .chunks_exact(3)
            .zip(frame.chunks_exact_mut(4))
        {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }

    fn render_with_overlay(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        let egui_renderer = &mut self.egui_renderer;
        let (width, height) = (self.width, self.height);

        self.pixels.render_with(|encoder, render_target, context| {
            // The scaling pass blits the curve framebuffer first.
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [width, height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui overlay"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the curve underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
