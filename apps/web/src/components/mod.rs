//! UI Components

mod epod_select;
mod ticket_card;
mod ticket_list;

pub use epod_select::EpodSelect;
pub use ticket_card::TicketCard;
pub use ticket_list::TicketList;
