//! Control panel: one box per group of inputs and readouts.
//!
//! Boxes only read [`ViewSignals`](crate::app::ViewSignals) and forward user
//! actions to the [`Controller`](crate::app::Controller); they never change
//! rotation state themselves.

mod animation_box;
mod angle_box;
mod axis_box;
mod preset_box;
mod quaternion_box;

pub use animation_box::AnimationBox;
pub use angle_box::AngleBox;
pub use axis_box::AxisBox;
pub use preset_box::PresetBox;
pub use quaternion_box::QuaternionBox;

use leptos::wasm_bindgen::JsCast;
use leptos::web_sys::HtmlInputElement;

fn input_event_value(ev: &leptos::web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}
