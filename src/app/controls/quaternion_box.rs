//! Read-only quaternion components and magnitude.

use leptos::prelude::*;

use crate::app::ViewSignals;

#[component]
pub fn QuaternionBox(signals: ViewSignals) -> impl IntoView {
    let readout = signals.readout;
    let rows: [(&'static str, fn(&crate::app::format::QuaternionReadout) -> String); 5] = [
        ("w", |r| r.w.clone()),
        ("x", |r| r.x.clone()),
        ("y", |r| r.y.clone()),
        ("z", |r| r.z.clone()),
        ("|q|", |r| r.magnitude.clone()),
    ];

    view! {
        <div class="control-section">
            <h2>"Quaternion"</h2>
            <table class="quaternion-readout">
                {rows
                    .into_iter()
                    .map(|(name, field)| {
                        view! {
                            <tr>
                                <th>{name}</th>
                                <td class="readout-value">{move || readout.with(field)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </table>
        </div>
    }
}
