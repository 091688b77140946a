//! Panel overlay plumbing.
//!
//! The parameter panel is layered over the point cloud in its own render
//! pass, after the stars and without touching the depth buffer. This module
//! owns everything that pass needs: the egui context, the winit bridge
//! feeding it events, and the wgpu renderer turning tessellated shapes into
//! draw calls. The panel's actual widgets live in [`crate::panel`].

use std::sync::Arc;

use winit::window::Window;

/// Egui plumbing for the parameter panel.
pub struct PanelOverlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// One tessellated UI frame, handed from [`finish`] to [`paint`].
///
/// [`finish`]: PanelOverlay::finish
/// [`paint`]: PanelOverlay::paint
pub struct UiFrame {
    paint_jobs: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl PanelOverlay {
    /// The renderer is built without a depth format; [`paint`] attaches
    /// color only.
    ///
    /// [`paint`]: PanelOverlay::paint
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();
        ctx.style_mut(|style| {
            style.visuals = egui::Visuals::dark();
            // Shadows bleed badly over the additive starfield.
            style.visuals.window_shadow = egui::Shadow::NONE;
            style.visuals.popup_shadow = egui::Shadow::NONE;
        });

        Self {
            state: egui_winit::State::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                window.as_ref(),
                Some(window.scale_factor() as f32),
                None,
                None,
            ),
            renderer: egui_wgpu::Renderer::new(
                device,
                surface_format,
                egui_wgpu::RendererOptions {
                    msaa_samples: 1,
                    depth_stencil_format: None,
                    dithering: false,
                    ..Default::default()
                },
            ),
            ctx,
        }
    }

    /// The context panel widgets draw into.
    pub fn ctx(&self) -> &egui::Context {
        &self.ctx
    }

    /// Feed a winit event.
    ///
    /// Returns true when egui claimed it; claimed events must not drive the
    /// orbit controls.
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Open the UI frame. Widget code runs between this and [`finish`].
    ///
    /// [`finish`]: PanelOverlay::finish
    pub fn begin(&mut self, window: &Window) {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);
    }

    /// Close the UI frame and tessellate whatever the widgets produced.
    pub fn finish(&mut self, window: &Window) -> UiFrame {
        let output = self.ctx.end_frame();
        self.state
            .handle_platform_output(window, output.platform_output);

        UiFrame {
            paint_jobs: self
                .ctx
                .tessellate(output.shapes, output.pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }

    /// Record the whole panel pass into `encoder`: upload this frame's
    /// texture deltas and vertex data, draw over `view` (loading the point
    /// cloud already there, no depth attachment), and release the textures
    /// egui is finished with. Consumes the frame.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        frame: UiFrame,
    ) {
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: frame.pixels_per_point,
        };

        for (id, delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen);

        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Panel Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        depth_slice: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            self.renderer.render(&mut pass, &frame.paint_jobs, &screen);
        }

        // Safe before submit: the recorded pass holds its own references.
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
