use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use screen_dpi::cli::Cli;
use screen_dpi::config::CalibratorConfig;
use screen_dpi::core::{compute_density, read_screen_info, Calibrator, Event, HostInfo, Outcome};
use screen_dpi::panel;
use screen_dpi::renderer::UiRenderer;
use screen_dpi::report::{Report, SystemReport};
use screen_dpi::window::{probe_screen, Window};

const INITIAL_WINDOW_WIDTH: u32 = 720;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

// === Application ===

struct App {
    config: CalibratorConfig,
    host: HostInfo,
    window: Option<Window>,
    renderer: Option<UiRenderer>,
    calibrator: Option<Calibrator>,
}

impl App {
    fn new(config: CalibratorConfig, host: HostInfo) -> Self {
        Self {
            config,
            host,
            window: None,
            renderer: None,
            calibrator: None,
        }
    }

    /// Re-read the monitor after anything that may have moved or rescaled the window
    fn rescan(&mut self) {
        let (Some(window), Some(calibrator)) = (&self.window, &mut self.calibrator) else {
            return;
        };
        if let Some(screen) = window.current_screen() {
            if let Outcome::Computed(result) = calibrator.handle(Event::ScreenChanged(screen)) {
                info!("recomputed for new screen: {:.1} dpi", result.dpi);
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer), Some(calibrator)) =
            (&self.window, &mut self.renderer, &mut self.calibrator)
        else {
            return;
        };

        let system = SystemReport::new(calibrator.screen(), &self.host);
        let mut events = Vec::new();
        let frame = renderer.render(window.inner(), |ctx| {
            events = panel::show(ctx, calibrator, &system);
        });

        let had_events = !events.is_empty();
        for event in events {
            calibrator.handle(event);
        }

        match frame {
            Ok(repaint_now) => {
                if repaint_now || had_events {
                    window.request_redraw();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("out of GPU memory");
                event_loop.exit();
            }
            Err(e) => error!("render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title("Screen DPI Checker")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(UiRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                error!("failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let window = Window::new(window);
        let calibrator = match window.current_screen() {
            Some(screen) => Calibrator::new(screen, self.config),
            None => {
                error!("no monitor reported for the calibrator window");
                event_loop.exit();
                return;
            }
        };
        info!("screen: {:?}", calibrator.screen());

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.calibrator = Some(calibrator);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            let response = renderer.handle_event(window.inner(), &event);
            if response.repaint {
                window.request_redraw();
            }
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                self.rescan();
            }
            WindowEvent::Moved(_) | WindowEvent::ScaleFactorChanged { .. } => self.rescan(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Print a report without opening a window
fn run_one_shot(cli: &Cli) -> anyhow::Result<()> {
    let screen = match cli.fixed_screen() {
        Some(fixed) => read_screen_info(&fixed),
        None => probe_screen()?,
    };

    let result = cli
        .calibration()
        .map(|input| compute_density(&screen, &input))
        .transpose()?;

    let report = Report::new(&screen, &cli.host(), result.as_ref());
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.is_one_shot() {
        return run_one_shot(&cli);
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(cli.calibrator_config(), cli.host());

    info!("Screen DPI Checker - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
