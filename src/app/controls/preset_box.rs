use leptos::prelude::*;

use crate::app::Controller;
use crate::app::preset::Preset;

#[component]
pub fn PresetBox(controller: Controller) -> impl IntoView {
    view! {
        <div class="control-section">
            <h2>"Examples"</h2>
            <div class="preset-buttons">
                {Preset::ALL
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <button
                                class="preset-button"
                                data-preset=preset.id()
                                on:click=move |_| controller.update_value(|v| v.apply_preset(preset))
                            >
                                {preset.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="hint">"Keys: space play/pause, 1-8 examples, R reset"</p>
        </div>
    }
}
