//! Application wiring: window, events, and the frame loop.
//!
//! Everything is single-threaded and frame-driven. Panel edits and pointer
//! moves overwrite shared state between frames (last write wins); a committed
//! edit regenerates the point cloud synchronously inside the frame that
//! observed it; the integrator runs every frame regardless of input.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::AppError;
use crate::galaxy::{self, ParticleBuffer};
use crate::gpu::{GpuState, PanelOverlay};
use crate::input::{Input, MouseButton};
use crate::panel;
use crate::params::GalaxyParams;
use crate::physics::{self, VelocityField};
use crate::pointer::PointerTarget;
use crate::time::Time;

const ORBIT_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.3;
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 60.0;

/// Run the galaxy viewer. Blocks until the window is closed.
pub fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    overlay: Option<PanelOverlay>,

    params: GalaxyParams,
    buffer: ParticleBuffer,
    velocities: VelocityField,
    pointer: PointerTarget,
    rng: SmallRng,

    input: Input,
    time: Time,
}

impl App {
    fn new() -> Self {
        let params = GalaxyParams::default();
        let mut rng = SmallRng::from_entropy();
        let buffer = galaxy::generate(&params, &mut rng);
        let velocities = VelocityField::new(buffer.count());

        Self {
            window: None,
            gpu: None,
            overlay: None,
            params,
            buffer,
            velocities,
            pointer: PointerTarget::new(),
            rng,
            input: Input::new(1280, 720),
            time: Time::new(),
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let (Some(gpu), Some(overlay)) = (self.gpu.as_mut(), self.overlay.as_mut()) else {
            return;
        };

        let (time, _delta) = self.time.update();

        // Camera controls from this frame's accumulated mouse state.
        if self.input.mouse_held(MouseButton::Left) {
            let drag = self.input.mouse_delta();
            gpu.camera.yaw -= drag.x * ORBIT_SENSITIVITY;
            gpu.camera.pitch = (gpu.camera.pitch + drag.y * ORBIT_SENSITIVITY).clamp(-1.5, 1.5);
        }
        let scroll = self.input.scroll_delta();
        if scroll != 0.0 {
            gpu.camera.distance =
                (gpu.camera.distance - scroll * ZOOM_SENSITIVITY).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }

        overlay.begin(&window);
        let panel_out = panel::draw(overlay.ctx(), &mut self.params, self.time.fps());
        if panel_out.regenerate {
            self.buffer = galaxy::generate(&self.params, &mut self.rng);
            self.velocities.reset(self.buffer.count());
            gpu.replace_point_cloud(&self.buffer.positions, &self.buffer.colors);
        }

        // Cursor gravity: re-project the pointer and pull every particle.
        let view_proj = gpu.camera.view_proj(gpu.aspect());
        self.pointer.update(self.input.mouse_ndc(), view_proj);
        physics::integrate(
            &mut self.buffer.positions,
            self.velocities.as_mut_slice(),
            self.pointer.get(),
            self.params.gravity,
            self.params.gravity_power,
        );
        gpu.upload_positions(&self.buffer.positions);

        let ui_frame = overlay.finish(&window);
        match gpu.render(self.params.size, time, overlay, ui_frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                width: gpu.config.width,
                height: gpu.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }

        self.input.begin_frame();
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("whorl - spiral galaxy")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                eprintln!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input.set_window_size(size.width, size.height);

        let gpu = match pollster::block_on(GpuState::new(
            window.clone(),
            &self.buffer.positions,
            &self.buffer.colors,
        )) {
            Ok(gpu) => gpu,
            Err(e) => {
                eprintln!("GPU init failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.overlay = Some(PanelOverlay::new(gpu.device(), gpu.surface_format(), &window));
        self.gpu = Some(gpu);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let consumed = match (&self.window, &mut self.overlay) {
            (Some(window), Some(overlay)) => overlay.handle_event(window, &event),
            _ => false,
        };

        // Cursor moves always reach the mouse state (the pointer target
        // follows the cursor even over the panel) and button releases always
        // reach it (a drag must not stick when released over the panel);
        // everything else stays with the panel once egui claims it.
        let passes_anyway = matches!(
            event,
            WindowEvent::CursorMoved { .. }
                | WindowEvent::MouseInput {
                    state: ElementState::Released,
                    ..
                }
        );
        if !consumed || passes_anyway {
            self.input.handle_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.input
                    .set_window_size(physical_size.width, physical_size.height);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}
