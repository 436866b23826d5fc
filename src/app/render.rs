//! three-d renderer on the page canvas.
//!
//! Draws continuously: every frame reads the latest [`RenderState`] written
//! by the controller and feeds the frame time to the FPS meter.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::web_sys::{HtmlCanvasElement, HtmlElement};
use three_d::*;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::web::WindowBuilderExtWebSys;
use winit::window::{Window, WindowBuilder};

use super::error::StartupError;
use super::fps::FpsMeter;
use super::page::{self, CANVAS_CONTAINER_ID, CANVAS_ID};
use super::scene::{RenderState, Scene};

const BACKGROUND: (f32, f32, f32) = (240.0 / 255.0, 248.0 / 255.0, 1.0);

pub struct Renderer {
    event_loop: EventLoop<()>,
    window: Window,
    gl: WindowedContext,
    camera: Camera,
    control: OrbitControl,
    ambient: AmbientLight,
    sun: DirectionalLight,
    scene: Scene,
}

/// CSS size of the canvas container, in logical pixels.
fn container_size() -> (f64, f64) {
    match page::element_by_id::<HtmlElement>(CANVAS_CONTAINER_ID) {
        Ok(container) => (container.client_width() as f64, container.client_height() as f64),
        Err(_) => (1.0, 1.0),
    }
}

impl Renderer {
    pub fn new() -> Result<Self, StartupError> {
        let canvas = page::element_by_id::<HtmlCanvasElement>(CANVAS_ID)?;
        // Fails early when the container is missing, before any GL work.
        page::element_by_id::<HtmlElement>(CANVAS_CONTAINER_ID)?;

        let event_loop = EventLoop::new();
        let (width, height) = container_size();
        let window = WindowBuilder::new()
            .with_title("Quaternion Visualizer".to_string())
            .with_canvas(Some(canvas))
            .with_inner_size(winit::dpi::LogicalSize::new(width, height))
            .with_prevent_default(true)
            .build(&event_loop)
            .map_err(|e| StartupError::Window(e.to_string()))?;

        let surface_settings = SurfaceSettings::default();
        let gl = WindowedContext::from_winit_window(&window, surface_settings)
            .or_else(|_| {
                let mut fallback = surface_settings;
                fallback.multisamples = 0;
                WindowedContext::from_winit_window(&window, fallback)
            })
            .map_err(|e| StartupError::Context(format!("{:?}", e)))?;

        let (w, h): (u32, u32) = window.inner_size().into();
        let camera = Camera::new_perspective(
            Viewport::new_at_origo(w.max(1), h.max(1)),
            vec3(5.0, 5.0, 5.0),
            vec3(0.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            degrees(75.0),
            0.1,
            1000.0,
        );
        let control = OrbitControl::new(camera.target(), 1.0, 100.0);
        let ambient = AmbientLight::new(&gl, 0.6, Srgba::WHITE);
        // Light travels from (10, 10, 5) towards the origin.
        let sun = DirectionalLight::new(&gl, 1.6, Srgba::WHITE, vec3(-10.0, -10.0, -5.0));
        let scene = Scene::new(&gl);

        Ok(Self { event_loop, window, gl, camera, control, ambient, sun, scene })
    }

    /// Hand the page over to the render loop. Never returns.
    pub fn run(self, render_state: Rc<RefCell<RenderState>>, fps: RwSignal<Option<u32>>, fps_sample_frames: u32) {
        let Self { event_loop, window, gl, mut camera, mut control, ambient, sun, mut scene } = self;
        let mut frame_input_generator = FrameInputGenerator::from_winit_window(&window);
        let mut meter = FpsMeter::new(fps_sample_frames);
        log::info!("render loop started");

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match &event {
                Event::MainEventsCleared => window.request_redraw(),
                Event::RedrawRequested(_) => {
                    let (width, height) = container_size();
                    window.set_inner_size(winit::dpi::LogicalSize::new(width, height));

                    let mut frame_input = frame_input_generator.generate(&gl);
                    camera.set_viewport(frame_input.viewport);
                    control.handle_events(&mut camera, &mut frame_input.events);

                    scene.apply(&render_state.borrow());
                    let (r, g, b) = BACKGROUND;
                    frame_input
                        .screen()
                        .clear(ClearState::color_and_depth(r, g, b, 1.0, 1.0))
                        .render(&camera, scene.objects(), &[&ambient, &sun]);
                    let _ = gl.swap_buffers();

                    if let Some(value) = meter.record(frame_input.elapsed_time) {
                        log::trace!("fps {}", value);
                        fps.set(Some(value));
                    }
                }
                Event::WindowEvent { event, .. } => {
                    frame_input_generator.handle_winit_window_event(event);
                    match event {
                        WindowEvent::Resized(physical_size) => gl.resize(*physical_size),
                        WindowEvent::ScaleFactorChanged { new_inner_size, .. } => gl.resize(**new_inner_size),
                        WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                        _ => {}
                    }
                }
                _ => {}
            }
        });
    }
}
