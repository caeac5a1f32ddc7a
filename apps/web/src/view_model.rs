//! Projection of one EPOD's tickets into card content, with every
//! placeholder already applied. Components only lay this out.

use crate::model::{LineItem, Scalar, Ticket, TicketDataset};

pub const NO_TICKETS: &str = "No tickets found for this EPOD.";
pub const NO_NOTES: &str = "No notes available";
pub const NO_LINE_ITEMS: &str = "No line items available";
pub const MISSING_DESCRIPTION: &str = "N/A";
pub const MISSING_QUANTITY: &str = "0";
pub const MISSING_CUSTOMER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketListing {
    NoTickets,
    Cards(Vec<TicketCardContent>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCardContent {
    /// `Ticket: <number>`
    pub ticket_label: String,
    /// `EPOD: <customer>`; the caption says EPOD but the value is the customer
    pub epod_label: String,
    pub notes: String,
    pub line_items: LineItemsContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemsContent {
    Empty,
    Rows(Vec<LineItemRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemRow {
    pub description: String,
    pub quantity: String,
}

/// Cards for every ticket filed under `epod`, in dataset order
pub fn ticket_listing(dataset: &TicketDataset, epod: &str) -> TicketListing {
    match dataset.tickets_for(epod) {
        Some(tickets) if !tickets.is_empty() => TicketListing::Cards(
            tickets
                .iter()
                .map(|(number, ticket)| ticket_card(number, ticket))
                .collect(),
        ),
        _ => TicketListing::NoTickets,
    }
}

/// `key` labels the card when the ticket itself carries no number
pub fn ticket_card(key: &str, ticket: &Ticket) -> TicketCardContent {
    let number = displayed(ticket.ticket_number.as_ref(), key);
    let customer = displayed(ticket.customer.as_ref(), MISSING_CUSTOMER);

    let line_items = match ticket.line_items.as_deref() {
        Some(items) if !items.is_empty() => {
            LineItemsContent::Rows(items.iter().map(line_item_row).collect())
        }
        _ => LineItemsContent::Empty,
    };

    TicketCardContent {
        ticket_label: format!("Ticket: {number}"),
        epod_label: format!("EPOD: {customer}"),
        notes: displayed(ticket.notes.as_ref(), NO_NOTES),
        line_items,
    }
}

fn line_item_row(item: &LineItem) -> LineItemRow {
    LineItemRow {
        description: displayed(item.description.as_ref(), MISSING_DESCRIPTION),
        quantity: displayed(item.quantity.as_ref(), MISSING_QUANTITY),
    }
}

/// Absent or blank values show `fallback`
fn displayed(value: Option<&Scalar>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_blank() => value.to_string(),
        _ => fallback.to_string(),
    }
}
