use std::sync::Arc;

use anyhow::{anyhow, Context};
use log::debug;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::monitor::MonitorHandle;
use winit::window::{Window as WinitWindow, WindowId};

use crate::core::read_screen_info;
use crate::traits::ScreenSource;
use crate::types::ScreenInfo;

impl ScreenSource for MonitorHandle {
    fn logical_size(&self) -> (f64, f64) {
        let logical: LogicalSize<f64> = self.size().to_logical(MonitorHandle::scale_factor(self));
        (logical.width, logical.height)
    }

    fn scale_factor(&self) -> Option<f64> {
        Some(MonitorHandle::scale_factor(self))
    }
}

/// Wrapper around the winit window hosting the calibrator
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Read the monitor the window currently sits on
    pub fn current_screen(&self) -> Option<ScreenInfo> {
        self.inner
            .current_monitor()
            .or_else(|| self.inner.primary_monitor())
            .map(|monitor| read_screen_info(&monitor))
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

/// Primary monitor, or the first one when the platform has no notion of primary
fn pick_monitor(event_loop: &ActiveEventLoop) -> Option<MonitorHandle> {
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
}

/// One-shot handler that reads the monitor and leaves the loop
#[derive(Default)]
struct MonitorProbe {
    screen: Option<ScreenInfo>,
}

impl ApplicationHandler for MonitorProbe {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(monitor) = pick_monitor(event_loop) {
            debug!("probing monitor {:?}", monitor.name());
            self.screen = Some(read_screen_info(&monitor));
        }
        event_loop.exit();
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, _event: WindowEvent) {}
}

/// Read the primary monitor without opening a window
pub fn probe_screen() -> anyhow::Result<ScreenInfo> {
    let event_loop = EventLoop::new().context("no display available; pass --width and --height")?;
    let mut probe = MonitorProbe::default();
    event_loop.run_app(&mut probe)?;
    probe
        .screen
        .ok_or_else(|| anyhow!("the display server reported no monitors"))
}
