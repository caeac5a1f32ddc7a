use leptos::prelude::*;

use crate::view_model::{LineItemsContent, TicketCardContent, NO_LINE_ITEMS};

/// Header, notes and line items for one ticket
#[component]
pub fn TicketCard(card: TicketCardContent) -> impl IntoView {
    let TicketCardContent {
        ticket_label,
        epod_label,
        notes,
        line_items,
    } = card;

    view! {
        <div class="ticket-card">
            <div class="ticket-header">
                <div class="ticket-number">{ticket_label}</div>
                <div class="epod-id">{epod_label}</div>
            </div>
            <div class="ticket-notes">
                <h3>"Notes"</h3>
                <p>{notes}</p>
            </div>
            <LineItems content=line_items />
        </div>
    }
}

#[component]
fn LineItems(content: LineItemsContent) -> impl IntoView {
    let body = match content {
        LineItemsContent::Empty => view! { <p>{NO_LINE_ITEMS}</p> }.into_any(),
        LineItemsContent::Rows(rows) => view! {
            <table class="line-items-table">
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th class="qty-column">"Quantity"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.description}</td>
                                    <td class="qty-column">{row.quantity}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <div class="line-items">
            <h3>"Line Items"</h3>
            {body}
        </div>
    }
}
