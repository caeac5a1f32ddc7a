use leptos::prelude::*;

use crate::config::EPOD_SELECT_ID;

/// EPOD dropdown; the blank first option clears the selection
#[component]
pub fn EpodSelect(epod_ids: Memo<Vec<String>>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <select
            id=EPOD_SELECT_ID
            on:change=move |ev| on_select.run(event_target_value(&ev))
        >
            <option value="">"-- Select an EPOD --"</option>
            <For
                each=move || epod_ids.get()
                key=|epod| epod.clone()
                children=move |epod| {
                    view! { <option value=epod.clone()>{epod}</option> }
                }
            />
        </select>
    }
}
