//! Play/pause, speed and the FPS readout.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::config::VisualizerConfig;
use crate::app::format::format_speed;
use crate::app::slider_widget::{RangeSlider, SliderConfig};
use crate::app::{Controller, ViewSignals};

#[component]
pub fn AnimationBox(controller: Controller, signals: ViewSignals, config: VisualizerConfig) -> impl IntoView {
    let on_toggle = move |_: leptos::web_sys::MouseEvent| {
        controller.update_value(|v| v.toggle_animation());
    };
    let on_speed_change: Rc<dyn Fn(f64)> = Rc::new(move |speed| {
        controller.update_value(|v| v.set_speed(speed));
    });
    let speed_config = SliderConfig::speed(config.speed_min, config.speed_max, config.speed_step);

    view! {
        <div class="control-section">
            <h2>"Animation"</h2>
            <button class="play-button" on:click=on_toggle>
                {move || if signals.running.get() { "⏸ Pause" } else { "▶ Play" }}
            </button>
            <RangeSlider
                label="Speed"
                config=speed_config
                value=signals.speed
                format_value=format_speed
                on_value_change=on_speed_change
            />
            <div class="readout">"Speed: " {move || format_speed(signals.speed.get())} "°/frame"</div>
            <div class="readout">
                "FPS: "
                {move || signals.fps.get().map_or_else(|| "--".to_string(), |fps| fps.to_string())}
            </div>
        </div>
    }
}
