//! Draggable slider for the angle and speed controls.
//!
//! The value lives in a caller-owned signal. Dragging (or arrow keys on the
//! focused handle) only reports candidates through `on_value_change`; the
//! handle moves when the signal changes, so presets and the animation move
//! it as well. Styles are injected on first use.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::web_sys::{KeyboardEvent, PointerEvent};

static SLIDER_STYLES_INJECTED: AtomicBool = AtomicBool::new(false);

const SLIDER_CSS: &str = r#"
.range-slider {
  display: flex;
  align-items: center;
  gap: 0.8em;
  margin: 0.6em 0 1.4em;
}
.range-slider-label {
  min-width: 3.5em;
  font-size: 0.9em;
  color: #345;
}
.range-slider-track {
  position: relative;
  flex: 1;
  height: 0.4em;
  border-radius: 2px;
  background: #d7e3ef;
  touch-action: none;
  cursor: pointer;
}
.range-slider-fill {
  position: absolute;
  left: 0;
  top: 0;
  bottom: 0;
  border-radius: 2px;
  background: #5b8def;
  pointer-events: none;
}
.range-slider-marker {
  position: absolute;
  top: 0.9em;
  transform: translateX(-50%);
  font-size: 0.65em;
  color: #789;
  pointer-events: none;
}
.range-slider-handle {
  position: absolute;
  top: 50%;
  transform: translate(-50%, -50%);
  min-width: 2.6em;
  padding: 0.1em 0.2em;
  border-radius: 3px;
  background: #2f6fdf;
  color: #fff;
  font: 0.7em monospace;
  text-align: center;
  cursor: grab;
}
.range-slider-handle:focus {
  outline: 2px solid #f5a623;
}
"#;

#[derive(Clone)]
pub struct SliderMarker {
    pub value: f64,
    pub label: String,
}

#[derive(Clone)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    /// Values snap to `min + k * step`.
    pub step: f64,
    pub markers: Vec<SliderMarker>,
}

impl SliderConfig {
    /// Whole degrees over one full turn.
    pub fn angle_degrees() -> Self {
        Self {
            min: 0.0,
            max: 360.0,
            step: 1.0,
            markers: [0.0, 90.0, 180.0, 270.0, 360.0]
                .into_iter()
                .map(|v| SliderMarker { value: v, label: format!("{}°", v) })
                .collect(),
        }
    }

    pub fn speed(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            markers: vec![
                SliderMarker { value: min, label: format!("{:.1}", min) },
                SliderMarker { value: max, label: format!("{:.1}", max) },
            ],
        }
    }
}

/// Position of `value` along the track, in [0, 1].
fn value_to_fraction(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return 0.0;
    }
    ((value - min) / range).clamp(0.0, 1.0)
}

fn fraction_to_value(fraction: f64, min: f64, max: f64) -> f64 {
    min + fraction * (max - min)
}

/// Snap to the step grid and keep within range.
fn snap(value: f64, config: &SliderConfig) -> f64 {
    let snapped = if config.step > 0.0 {
        let steps = ((value - config.min) / config.step).round();
        config.min + steps * config.step
    } else {
        value
    };
    // Round away binary noise like 0.30000000000000004.
    let snapped = (snapped * 1e9).round() / 1e9;
    snapped.clamp(config.min, config.max)
}

fn percent(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}

#[component]
pub fn RangeSlider(
    label: &'static str,
    config: SliderConfig,
    value: RwSignal<f64>,
    /// Text shown on the handle.
    format_value: fn(f64) -> String,
    on_value_change: Rc<dyn Fn(f64)>,
) -> impl IntoView {
    let track_ref = NodeRef::<leptos::html::Div>::new();
    let dragging = StoredValue::new(false);
    let (min, max) = (config.min, config.max);
    let inject_styles = !SLIDER_STYLES_INJECTED.swap(true, Ordering::SeqCst);

    let pick = Rc::new({
        let config = config.clone();
        let on_value_change = on_value_change.clone();
        move |client_x: f64| {
            let Some(track) = track_ref.get_untracked() else {
                return;
            };
            let rect = track.get_bounding_client_rect();
            if rect.width() <= 0.0 {
                return;
            }
            let fraction = ((client_x - rect.left()) / rect.width()).clamp(0.0, 1.0);
            on_value_change(snap(fraction_to_value(fraction, min, max), &config));
        }
    });

    let on_pointerdown = {
        let pick = pick.clone();
        move |ev: PointerEvent| {
            ev.prevent_default();
            if let Some(track) = track_ref.get_untracked() {
                let _ = track.set_pointer_capture(ev.pointer_id());
            }
            dragging.set_value(true);
            pick(ev.client_x() as f64);
        }
    };
    let on_pointermove = move |ev: PointerEvent| {
        if dragging.get_value() {
            pick(ev.client_x() as f64);
        }
    };
    let on_pointerup = move |_: PointerEvent| dragging.set_value(false);

    let on_keydown = {
        let config = config.clone();
        move |ev: KeyboardEvent| {
            let direction = match ev.key().as_str() {
                "ArrowLeft" | "ArrowDown" => -1.0,
                "ArrowRight" | "ArrowUp" => 1.0,
                _ => return,
            };
            ev.prevent_default();
            let current = value.get_untracked();
            on_value_change(snap(current + direction * config.step, &config));
        }
    };

    let markers = config.markers;

    view! {
        <>
            {inject_styles.then(|| view! { <style>{SLIDER_CSS}</style> })}
            <div class="range-slider">
                <span class="range-slider-label">{label}</span>
                <div
                    class="range-slider-track"
                    node_ref=track_ref
                    on:pointerdown=on_pointerdown
                    on:pointermove=on_pointermove
                    on:pointerup=on_pointerup
                    on:pointercancel=on_pointerup
                >
                    <div
                        class="range-slider-fill"
                        style:width=move || percent(value_to_fraction(value.get(), min, max))
                    ></div>
                    {markers
                        .into_iter()
                        .map(|m| {
                            view! {
                                <span
                                    class="range-slider-marker"
                                    style:left=percent(value_to_fraction(m.value, min, max))
                                >
                                    {m.label}
                                </span>
                            }
                        })
                        .collect_view()}
                    <div
                        class="range-slider-handle"
                        role="slider"
                        tabindex="0"
                        aria-label=label
                        aria-valuemin=min.to_string()
                        aria-valuemax=max.to_string()
                        aria-valuenow=move || value.get().to_string()
                        style:left=move || percent(value_to_fraction(value.get(), min, max))
                        on:keydown=on_keydown
                    >
                        {move || format_value(value.get())}
                    </div>
                </div>
            </div>
        </>
    }
}
