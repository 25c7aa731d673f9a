//! Window loop: owns the window, GPU state and driver, routes events, and
//! schedules the next frame after each redraw.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::audio::BackgroundAudio;
use crate::config::StarfieldConfig;
use crate::driver::Driver;
use crate::error::StarfieldError;
use crate::field::StarField;
use crate::gpu::GpuState;
use crate::time::FrameTimer;

/// Generate the field, start the music and run the window loop.
///
/// Blocks until the window is closed.
pub fn run(config: StarfieldConfig) -> Result<(), StarfieldError> {
    config.validate()?;

    let seed = config.field.seed.unwrap_or_else(rand::random);
    let stars = StarField::generate(&config.field, &mut SmallRng::seed_from_u64(seed));
    log::info!(
        "Generated {} stars within radius {} (seed {})",
        stars.len(),
        config.field.radius,
        seed
    );

    // Track choice stays random even when the sky is seeded
    let audio = match BackgroundAudio::start(&config.audio, &mut rand::thread_rng()) {
        Ok(audio) => {
            log::info!("Playing {}", audio.track().display());
            Some(audio)
        }
        Err(e) => {
            log::info!("Playback failed: {}", e);
            None
        }
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, stars, audio);
    event_loop.run_app(&mut app)?;
    log::info!(
        "Rendered {} frames ({:.1} fps)",
        app.timer.frame(),
        app.timer.fps()
    );

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    config: StarfieldConfig,
    stars: StarField,
    driver: Driver,
    timer: FrameTimer,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    _audio: Option<BackgroundAudio>,
    error: Option<StarfieldError>,
}

impl App {
    fn new(config: StarfieldConfig, stars: StarField, audio: Option<BackgroundAudio>) -> Self {
        let driver = Driver::new(&config.driver, config.window.width, config.window.height);
        Self {
            config,
            stars,
            driver,
            timer: FrameTimer::new(),
            window: None,
            gpu_state: None,
            _audio: audio,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StarfieldError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();
        self.driver.on_resize(size.width, size.height);
        self.driver.set_scale_factor(window.scale_factor());

        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            &self.stars.to_gpu(),
            &self.driver.uniforms(),
        ))?;

        window.request_redraw();
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        // Adapter and device setup must not count as animation time
        self.timer.reset();
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.timer.tick();
        let uniforms = self.driver.step(delta);

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(&uniforms) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu_state.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => log::error!("Render error: {:?}", e),
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.driver.pointer_mut().handle_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                log::debug!("Resized to {}x{}", physical_size.width, physical_size.height);
                self.driver.on_resize(physical_size.width, physical_size.height);
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
