use leptos::prelude::*;

use crate::components::TicketCard;
use crate::view_model::{TicketListing, NO_TICKETS};

#[component]
pub fn TicketList(listing: TicketListing) -> impl IntoView {
    match listing {
        TicketListing::NoTickets => view! { <div class="message">{NO_TICKETS}</div> }.into_any(),
        TicketListing::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <TicketCard card=card /> })
            .collect_view()
            .into_any(),
    }
}
