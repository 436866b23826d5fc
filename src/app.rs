use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod fps;
pub mod model;
pub mod page;
pub mod preset;
pub mod raf;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod rotation;
pub mod scene;

mod controls;
mod slider_widget;

use config::VisualizerConfig;
use controller::{RotationDisplay, Visualizer};
use controls::{AngleBox, AnimationBox, AxisBox, PresetBox, QuaternionBox};
use format::{format_axis, QuaternionReadout};
use model::RotationFrame;
use raf::RafScheduler;
use rotation::AxisVector;
use scene::RenderState;

/// Everything the page shows. Written only through [`SignalDisplay`].
#[derive(Clone, Copy)]
pub struct ViewSignals {
    pub axis_text: [RwSignal<String>; 3],
    pub angle: RwSignal<f64>,
    pub readout: RwSignal<QuaternionReadout>,
    pub running: RwSignal<bool>,
    pub speed: RwSignal<f64>,
    /// Written by the render loop; `None` until the first sample window ends.
    pub fps: RwSignal<Option<u32>>,
}

impl ViewSignals {
    fn new(fps: RwSignal<Option<u32>>) -> Self {
        Self {
            axis_text: std::array::from_fn(|_| RwSignal::new(String::new())),
            angle: RwSignal::new(0.0),
            readout: RwSignal::new(QuaternionReadout::default()),
            running: RwSignal::new(false),
            speed: RwSignal::new(0.0),
            fps,
        }
    }
}

/// Browser side of the controller: reactive signals for the panel and the
/// shared [`RenderState`] for the canvas.
pub struct SignalDisplay {
    signals: ViewSignals,
    render_state: Rc<RefCell<RenderState>>,
}

impl RotationDisplay for SignalDisplay {
    fn show_rotation(&mut self, frame: &RotationFrame) {
        self.signals.readout.set(QuaternionReadout::from(frame.quaternion));
        self.render_state.borrow_mut().update(frame);
    }

    fn show_axis(&mut self, axis: AxisVector) {
        for (signal, text) in self.signals.axis_text.iter().zip(format_axis(axis)) {
            signal.set(text);
        }
    }

    fn show_angle(&mut self, degrees: f64) {
        self.signals.angle.set(degrees);
    }

    fn show_animation(&mut self, running: bool) {
        self.signals.running.set(running);
    }

    fn show_speed(&mut self, speed: f64) {
        self.signals.speed.set(speed);
    }
}

pub type Controller = StoredValue<Visualizer<SignalDisplay, RafScheduler>, LocalStorage>;

/// Keyboard shortcuts go to the controller unless the user is typing.
fn install_shortcuts(controller: Controller) {
    use leptos::wasm_bindgen::JsCast;

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        let in_input = ev
            .target()
            .is_some_and(|t| t.dyn_into::<leptos::web_sys::HtmlInputElement>().is_ok());
        if in_input || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let key = ev.key();
        let consumed = controller.try_update_value(|v| v.handle_key(&key)).unwrap_or(false);
        if consumed && key == " " {
            // Keep space from scrolling the page or clicking a focused button.
            ev.prevent_default();
        }
    });
    on_cleanup(move || handle.remove());
}

#[component]
fn App(
    config: VisualizerConfig,
    render_state: Rc<RefCell<RenderState>>,
    fps: RwSignal<Option<u32>>,
) -> impl IntoView {
    let signals = ViewSignals::new(fps);
    let (scheduler, frame_slot) = RafScheduler::new();
    let display = SignalDisplay { signals, render_state };
    let controller: Controller = StoredValue::new_local(Visualizer::new(display, scheduler, config.initial_speed));

    frame_slot.install(move |_timestamp| {
        controller.update_value(|v| v.on_frame());
    });
    controller.update_value(|v| v.refresh());
    install_shortcuts(controller);

    view! {
        <h1>"Quaternion Visualizer"</h1>
        <AxisBox controller=controller signals=signals />
        <AngleBox controller=controller signals=signals />
        <QuaternionBox signals=signals />
        <AnimationBox controller=controller signals=signals config=config />
        <PresetBox controller=controller />
    }
}

pub fn main() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        use leptos::mount::mount_to;
        use render::Renderer;

        // Narrowed once the config is known.
        let _ = console_log::init_with_level(log::Level::Trace);

        wasm_bindgen_futures::spawn_local(async move {
            let config = config::load_config().await;
            log::set_max_level(config.level().unwrap_or(log::Level::Info).to_level_filter());

            let (renderer, leptos_root) = match Renderer::new().and_then(|r| {
                Ok((r, page::element_by_id::<leptos::web_sys::HtmlElement>(page::LEPTOS_ROOT_ID)?))
            }) {
                Ok(started) => started,
                Err(e) => {
                    log::error!("startup failed: {}", e);
                    page::hide_loading_screen();
                    page::show_error_message(&format!("Could not start the visualizer: {}", e), config.error_display_ms);
                    return;
                }
            };

            let render_state = Rc::new(RefCell::new(RenderState::default()));
            let fps = RwSignal::new(None);
            let fps_sample_frames = config.fps_sample_frames;
            let app_state = render_state.clone();
            mount_to(leptos_root, move || {
                view! { <App config=config.clone() render_state=app_state.clone() fps=fps /> }
            })
            .forget();

            page::hide_loading_screen();
            log::info!("visualizer ready");
            renderer.run(render_state, fps, fps_sample_frames);
        });
    }
}
