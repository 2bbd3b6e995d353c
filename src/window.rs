use softbuffer::{Context, Surface};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Theme, Window, WindowId},
};

use std::{
    num::NonZeroU32,
    sync::mpsc::{self, SyncSender},
    thread,
};

use crate::data::{Program, HEIGHT, WIDTH};

type WindowSurface = Surface<&'static Window, &'static Window>;

struct WindowState {
    prog: Program,
    window: Option<&'static Window>,
    surface: Option<WindowSurface>,
    exit_sender: Option<SyncSender<()>>,
    final_buffer_size: PhysicalSize<u32>,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.prog.print_startup_info();

        let scale = self.prog.scale() as u32;
        let win_size = PhysicalSize::<u32>::new(WIDTH as u32 * scale, HEIGHT as u32 * scale);

        let window_attributes = Window::default_attributes()
            .with_title("Rain in City")
            .with_inner_size(win_size)
            .with_resizable(false)
            .with_theme(Some(Theme::Dark));

        // Since we are leaking the window into a static
        // reference, resumed() is not allowed to be
        // called again as it would cause the build up
        // of leaked windows and potentially flood RAM.
        match self.window {
            None => {
                self.window = Some(Box::leak(Box::new(
                    event_loop.create_window(window_attributes).unwrap(),
                )))
            }

            Some(_) => panic!("Resume being called the 2nd time!"),
        }

        let window = self
            .window
            .expect("Window unwraps to none. This error should never happen!");

        // On XFCE this is needed to lock the size of the window.
        window.set_min_inner_size(Some(win_size));
        window.set_max_inner_size(Some(win_size));

        let size = window.inner_size();
        self.final_buffer_size = size;

        self.surface = {
            let context = Context::new(window).unwrap();
            let mut surface = Surface::new(&context, window).unwrap();

            Self::resize_surface(&mut surface, size.width, size.height);

            Some(surface)
        };

        let (exit_send, exit_recv) = mpsc::sync_channel(1);

        self.exit_sender = Some(exit_send);

        let itvl = self.prog.frame_interval();

        // Thread to control requesting redraws.
        let _ = thread::Builder::new().stack_size(1024).spawn(move || {
            loop {
                if exit_recv.recv_timeout(itvl).is_ok() {
                    break;
                }

                if !window.is_minimized().unwrap_or(false) {
                    window.request_redraw();
                }
            }
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(_) => {
                if let Some(w) = self.window.as_ref() {
                    w.request_redraw()
                }
            }

            WindowEvent::Occluded(b) => {
                self.prog.set_hidden(b);
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                let Some(surface) = self.surface.as_mut() else {
                    eprintln!("Raincity is unable to resize the surface buffer!");
                    return;
                };

                self.final_buffer_size.width = width;
                self.final_buffer_size.height = height;

                Self::resize_surface(surface, width, height);
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    event_loop.exit();
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(window) = self.window.as_ref() else {
                    return;
                };

                self.prog.render();

                if self.prog.is_hidden() {
                    return;
                }

                if let Some(Ok(mut buffer)) = self.surface.as_mut().map(|s| s.buffer_mut()) {
                    self.prog.pix.scale_to(
                        self.prog.scale() as usize,
                        &mut buffer,
                        Some(self.final_buffer_size.width as usize),
                    );

                    window.pre_present_notify();
                    if let Err(e) = buffer.present() {
                        eprintln!("Raincity is failing to present buffers to the window: {e}.");
                    }
                }
            }

            _ => {}
        }
    }
}

impl WindowState {
    fn resize_surface(surface: &mut WindowSurface, w: u32, h: u32) {
        surface
            .resize(
                NonZeroU32::new(w).expect("Surface width is zero"),
                NonZeroU32::new(h).expect("Surface height is zero"),
            )
            .expect("Failed to resize surface buffer");
    }
}

pub fn winit_main(prog: Program) {
    let event_loop = EventLoop::new().unwrap();

    let mut state = WindowState {
        prog,
        window: None,
        surface: None,
        exit_sender: None,
        final_buffer_size: PhysicalSize::<u32>::new(0, 0),
    };

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut state).unwrap();
    let _ = state.exit_sender.as_ref().map(|x| x.send(()));
}
