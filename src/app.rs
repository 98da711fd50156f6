use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    content::PortfolioContent,
    error::{Result, VitrineError},
    gfx::rendering::{
        render_engine::RenderEngine,
        tone_mapping::{SurfaceExtent, ToneMapping},
    },
    hero::{HeroConfig, HeroScene},
    page::Page,
    ui::{draw_page, UiManager},
};

/// Logical pixels scrolled per wheel line
const LINE_SCROLL: f32 = 60.0;

const WINDOW_TITLE: &str = "Vitrine";

/// The showcase window: hero scene behind, page drawn on top
pub struct VitrineApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

/// Everything that exists while the window is mounted
struct Mounted {
    window: Arc<Window>,
    render_engine: RenderEngine,
    ui_manager: UiManager,
    hero: HeroScene,
    page: Page,
    started: Instant,
}

struct AppState {
    config: HeroConfig,
    content: PortfolioContent,
    mounted: Option<Mounted>,
    fatal: Option<VitrineError>,
}

impl VitrineApp {
    /// Creates the event loop; the window is opened once the loop starts
    pub fn new(config: HeroConfig, content: PortfolioContent) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                content,
                mounted: None,
                fatal: None,
            },
        })
    }

    pub fn config(&self) -> &HeroConfig {
        &self.app_state.config
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.app_state.content
    }

    /// Runs until the window closes; setup failures are returned
    pub fn run(self) -> Result<()> {
        let Self {
            event_loop,
            mut app_state,
        } = self;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut app_state)?;

        match app_state.fatal.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn mount(&self, event_loop: &ActiveEventLoop) -> Result<Mounted> {
        let title = format!("{} | {}", self.content.profile.name, WINDOW_TITLE);
        let window = Arc::new(
            event_loop.create_window(
                WindowAttributes::default()
                    .with_title(title)
                    .with_inner_size(LogicalSize::new(1280, 800)),
            )?,
        );

        let scale = window.scale_factor();
        let PhysicalSize { width, height } = window.inner_size();
        let extent = SurfaceExtent::capped(width, height, scale, self.config.max_pixel_ratio);
        let render_engine = pollster::block_on(RenderEngine::new(
            window.clone(),
            extent,
            ToneMapping::with_exposure(self.config.exposure),
        ))?;

        let ui_manager = UiManager::new(
            render_engine.device(),
            render_engine.queue(),
            render_engine.surface_format(),
            &window,
        );

        let mut hero = HeroScene::mount(self.config.clone(), extent.aspect());
        hero.on_resize(extent.width, extent.height);
        hero.start_load();

        let logical: LogicalSize<f32> = window.inner_size().to_logical(scale);
        let page = Page::new(&self.content, logical.width, logical.height);

        Ok(Mounted {
            window,
            render_engine,
            ui_manager,
            hero,
            page,
            started: Instant::now(),
        })
    }

    /// Tears the hero down before the GPU device goes away
    fn unmount(&mut self) {
        let Some(mut mounted) = self.mounted.take() else {
            return;
        };
        mounted.hero.teardown();
        drop(mounted.ui_manager);
        mounted.render_engine.dispose();
    }
}

impl Mounted {
    fn resize(&mut self, size: PhysicalSize<u32>, max_pixel_ratio: f32) {
        let scale = self.window.scale_factor();
        let extent = SurfaceExtent::capped(size.width, size.height, scale, max_pixel_ratio);
        self.render_engine.resize(extent);
        self.hero.on_resize(extent.width, extent.height);

        let logical: LogicalSize<f32> = size.to_logical(scale);
        self.page.resize(logical.width, logical.height);
    }

    fn pointer_moved(&mut self, position: PhysicalPosition<f64>) {
        let size = self.window.inner_size();
        self.hero.on_pointer_move(
            position.x,
            position.y,
            f64::from(size.width),
            f64::from(size.height),
        );
        let scale = self.window.scale_factor();
        self.page
            .on_pointer_move((position.x / scale) as f32, (position.y / scale) as f32);
    }

    fn wheel(&mut self, delta: MouseScrollDelta) {
        // Positive winit deltas scroll up, page offsets grow downward
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL,
            MouseScrollDelta::PixelDelta(position) => {
                (-position.y / self.window.scale_factor()) as f32
            }
        };
        self.page.on_wheel(pixels);
    }

    fn redraw(&mut self, content: &PortfolioContent) {
        let now = Instant::now();
        self.page.update(now.duration_since(self.started).as_secs_f32());

        self.hero.poll_load(now);
        self.hero.tick(now);
        let viewport_height = self.page.layout().viewport_height();
        self.hero
            .scene_mut()
            .camera
            .set_scroll_offset(self.page.scroll_offset(), viewport_height);

        self.render_engine.set_clear_color(self.page.hero_background());
        self.render_engine.prepare(self.hero.scene_mut());

        let ui_manager = &mut self.ui_manager;
        let page = &mut self.page;
        let window = &self.window;
        self.render_engine.render_frame(
            self.hero.scene(),
            Some(
                |device: &wgpu::Device,
                 queue: &wgpu::Queue,
                 encoder: &mut wgpu::CommandEncoder,
                 view: &wgpu::TextureView| {
                    ui_manager.draw(device, queue, encoder, window, view, |ui| {
                        draw_page(ui, page, content);
                    });
                },
            ),
        );
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.mounted.is_some() {
            return;
        }

        match self.mount(event_loop) {
            Ok(mounted) => self.mounted = Some(mounted),
            Err(e) => {
                log::error!("Failed to start: {}", e);
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let max_pixel_ratio = self.config.max_pixel_ratio;
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
            window_id,
            event: event.clone(),
        };
        let typing = mounted.ui_manager.handle_input(&mounted.window, &ui_event);

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if !mounted.page.escape() && !typing {
                    self.unmount();
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => mounted.pointer_moved(position),
            WindowEvent::MouseWheel { delta, .. } => mounted.wheel(delta),
            WindowEvent::Resized(size) => mounted.resize(size, max_pixel_ratio),
            WindowEvent::CloseRequested => {
                self.unmount();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => mounted.redraw(&self.content),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mounted) = self.mounted.as_ref() {
            mounted.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
    }
}
