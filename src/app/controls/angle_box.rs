use std::rc::Rc;

use leptos::prelude::*;

use crate::app::format::format_degrees;
use crate::app::slider_widget::{RangeSlider, SliderConfig};
use crate::app::{Controller, ViewSignals};

#[component]
pub fn AngleBox(controller: Controller, signals: ViewSignals) -> impl IntoView {
    let on_value_change: Rc<dyn Fn(f64)> = Rc::new(move |degrees| {
        controller.update_value(|v| v.set_angle(degrees));
    });

    view! {
        <div class="control-section">
            <h2>"Rotation Angle"</h2>
            <RangeSlider
                label="θ"
                config=SliderConfig::angle_degrees()
                value=signals.angle
                format_value=format_degrees
                on_value_change=on_value_change
            />
            <div class="readout">"Angle: " {move || format_degrees(signals.angle.get())}</div>
        </div>
    }
}
