//! Ticket viewer page
//!
//! Dropdown, empty-state placeholder and results container, driven by a
//! single `PageController` held in a signal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EpodSelect, TicketList};
use crate::config::{DATA_URL, NO_SELECTION_ID, TICKETS_CONTAINER_ID};
use crate::controller::{PageController, Placeholder, SELECT_PROMPT};
use crate::loader;

#[component]
pub fn App() -> impl IntoView {
    let page = RwSignal::new(PageController::new());

    // One fetch for the lifetime of the page
    spawn_local(async move {
        let result = loader::fetch_dataset(DATA_URL).await;
        match &result {
            Ok(dataset) => {
                web_sys::console::log_1(&format!("[Loader] Loaded {} EPODs from {DATA_URL}", dataset.len()).into());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Loader] Error loading ticket data: {e}").into());
            }
        }
        page.update(|page| page.finish_load(result));
    });

    let epod_ids = Memo::new(move |_| page.with(PageController::epod_ids));
    let page_view = Memo::new(move |_| page.with(PageController::view));

    let on_select = Callback::new(move |epod: String| {
        page.update(|page| page.select(&epod));
    });

    view! {
        <main class="container">
            <h1>"EPOD Tickets"</h1>

            <EpodSelect epod_ids=epod_ids on_select=on_select />

            <div
                id=NO_SELECTION_ID
                class="message"
                class:hidden=move || page_view.with(|v| v.placeholder_hidden)
            >
                {move || match page_view.with(|v| v.placeholder) {
                    Placeholder::Prompt => view! { <p>{SELECT_PROMPT}</p> }.into_any(),
                    Placeholder::Error(message) => view! { <p class="error">{message}</p> }.into_any(),
                }}
            </div>

            <div
                id=TICKETS_CONTAINER_ID
                class:hidden=move || page_view.with(|v| v.results_hidden)
            >
                {move || {
                    page_view
                        .with(|v| v.listing.clone())
                        .map(|listing| view! { <TicketList listing=listing /> })
                }}
            </div>
        </main>
    }
}
