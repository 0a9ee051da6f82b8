use clap::Parser;
use glam::Vec3;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use shape_morph::camera::Camera;
use shape_morph::cli::Cli;
use shape_morph::controller::AnimationController;
use shape_morph::frame::FrameClock;
use shape_morph::input::{self, InputAction};
use shape_morph::overlay::OverlayInfo;
use shape_morph::renderer::Renderer;
use shape_morph::settings::Settings;

const INITIAL_WINDOW_WIDTH: u32 = 1024;
const INITIAL_WINDOW_HEIGHT: u32 = 768;

struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    controller: AnimationController,
    clock: FrameClock,
}

impl App {
    fn new(settings: Settings) -> Self {
        let [x, y, z] = settings.rotation_step;
        let camera = Camera::default()
            .with_distance(settings.camera_distance)
            .with_easing(settings.camera_easing);

        let mut controller = AnimationController::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT)
            .with_deltas(settings.deltas())
            .with_camera(camera)
            .with_rotation_step(Vec3::new(x, y, z));
        controller.set_parameters(settings.initial_parameters());
        controller.on_complete(|kind, parameter| {
            log::debug!("{kind} finished a {parameter} sweep");
        });

        Self {
            settings,
            window: None,
            renderer: None,
            controller,
            clock: FrameClock::new(),
        }
    }

    fn redraw(&mut self) {
        self.clock.tick();
        self.controller.tick();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        renderer.sync_shape(&self.controller);
        let overlay = self
            .settings
            .show_overlay
            .then(|| OverlayInfo::capture(&self.controller, self.clock.fps()));

        if let Err(e) = renderer.render(window, &self.controller, overlay.as_ref()) {
            log::error!("Render error: {}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Shape Morph")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.controller.resize(size.width, size.height);
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui handle the event first
        if self.settings.show_overlay {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                if renderer.handle_event(window, &event) {
                    return;
                }
            }
        }

        if let WindowEvent::RedrawRequested = event {
            self.redraw();
            return;
        }

        match input::translate(&event) {
            Some(InputAction::Exit) => event_loop.exit(),
            Some(action) => {
                if let InputAction::Resized { width, height } = action {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(width, height);
                    }
                }
                self.controller.handle(action);
            }
            None => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    log::info!("Starting with {} in {:?} mode", settings.shape, settings.mode);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);

    println!("Shape Morph - Controls: mouse to steer the camera, wheel to zoom, 1-5 shapes, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
