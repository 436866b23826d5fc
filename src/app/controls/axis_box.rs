//! Axis x/y/z fields and the Normalize button.

use leptos::prelude::*;

use crate::app::format::parse_number;
use crate::app::{Controller, ViewSignals};

use super::input_event_value;

const LABELS: [&str; 3] = ["x", "y", "z"];

#[component]
pub fn AxisBox(controller: Controller, signals: ViewSignals) -> impl IntoView {
    let texts = signals.axis_text;

    // The typed text stays as-is; the model only changes once all three
    // fields hold numbers.
    let on_input = move |index: usize, ev: leptos::web_sys::Event| {
        let Some(value) = input_event_value(&ev) else {
            return;
        };
        texts[index].set(value);
        let parsed: Option<Vec<f64>> = texts.iter().map(|t| parse_number(&t.get_untracked())).collect();
        if let Some([x, y, z]) = parsed.as_deref() {
            controller.update_value(|v| v.set_axis(*x, *y, *z));
        }
    };

    let on_normalize = move |_: leptos::web_sys::MouseEvent| {
        controller.update_value(|v| v.normalize_axis());
    };

    view! {
        <div class="control-section">
            <h2>"Rotation Axis"</h2>
            <div class="axis-inputs">
                {LABELS
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        view! {
                            <label class="axis-field">
                                <span>{*label}</span>
                                <input
                                    type="text"
                                    inputmode="decimal"
                                    class="vector-input"
                                    prop:value=move || texts[i].get()
                                    on:input=move |ev| on_input(i, ev)
                                />
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="normalize-button" on:click=on_normalize>"Normalize"</button>
        </div>
    }
}
