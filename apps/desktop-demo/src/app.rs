use crate::demo::Demo;
use tactus_foundation::SystemClock;
use tactus_platform_desktop_winit::DesktopWinitPlatform;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

struct DemoApp {
    demo: Demo,
    platform: DesktopWinitPlatform,
    window: Option<Window>,
}

impl DemoApp {
    fn title(&self) -> String {
        let scene = self.demo.scene();
        format!(
            "Tactus Gestures - {} scaling, zoom {:.2}x",
            scene.policy(),
            scene.view().scale
        )
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(LogicalSize::new(WIDTH, HEIGHT));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                self.platform.set_scale_factor(window.scale_factor());
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f32>(self.platform.scale_factor());
                self.demo.resize(logical.width);
            }
            _ => {}
        }
        let Some(pointer) = self.platform.process_event(&event) else {
            return;
        };
        if self.demo.handle(pointer) > 0 {
            if let Some(window) = &self.window {
                window.set_title(&self.title());
            }
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = DemoApp {
        demo: Demo::new(SystemClock::new(), WIDTH as f32)?,
        platform: DesktopWinitPlatform::default(),
        window: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
