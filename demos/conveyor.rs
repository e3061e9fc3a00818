//! Interactive conveyor demo.
//!
//! Drives a six-card carousel from a winit event loop: continuous
//! auto-rotation, left-button drag with momentum, and responsive radius on
//! resize. Since there is no rendering surface here, the sink reports which
//! card is frontmost whenever that changes.
//!
//! Run with `cargo run --example conveyor`.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use conveyor::carousel::{AutoRotate, CardTransform, CarouselEngine, TransformSink};
use conveyor::{DragTracker, FrameTimer, Input};

const CARD_COUNT: usize = 6;

/// Sink that tracks the frontmost card (highest stack order) and logs when
/// it changes.
#[derive(Default)]
struct FrontCardSink {
    best: Option<(usize, i32)>,
    front: Option<usize>,
}

impl FrontCardSink {
    fn end_pass(&mut self) {
        if let Some((index, _)) = self.best.take()
            && self.front != Some(index)
        {
            self.front = Some(index);
            log::info!("front card: {index}");
        }
    }
}

impl TransformSink for FrontCardSink {
    fn set(&mut self, index: usize, transform: &CardTransform) {
        match self.best {
            Some((_, best)) if best >= transform.stack_order => {}
            _ => self.best = Some((index, transform.stack_order)),
        }
    }
}

struct DemoApp {
    window: Option<Window>,
    engine: Option<CarouselEngine>,
    auto_rotate: Option<AutoRotate>,
    input: Input,
    drag: DragTracker,
    timer: FrameTimer,
    sink: FrontCardSink,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            window: None,
            engine: None,
            auto_rotate: None,
            input: Input::new(),
            drag: DragTracker::new(),
            timer: FrameTimer::new(),
            sink: FrontCardSink::default(),
        }
    }

    fn frame(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        let dt = self.timer.tick();

        if let Some(event) = self.drag.update(&self.input, dt) {
            engine.apply_drag(event, &mut self.sink);
        }
        engine.tick(&mut self.sink);
        self.sink.end_pass();

        self.input.end_frame();
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Conveyor")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        // A carousel with nothing to show stays inactive; the demo keeps
        // running without it.
        match CarouselEngine::new(CARD_COUNT, 1280.0) {
            Ok(mut engine) => {
                self.auto_rotate = Some(engine.start_auto_rotate());
                engine.recompute_layout(&mut self.sink);
                self.sink.end_pass();
                self.engine = Some(engine);
            }
            Err(e) => log::warn!("Carousel not activated: {e}"),
        }

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                // Dropping the handle stops the automatic advance before
                // the engine goes away.
                self.auto_rotate.take();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.input.handle_resize(size.width, size.height);
                if let Some(engine) = self.engine.as_mut() {
                    engine.on_resize(size.width as f32, &mut self.sink);
                    self.sink.end_pass();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_cursor_move(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_mouse_input(state, button);
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> conveyor::errors::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
