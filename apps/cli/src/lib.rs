// Export our modules for use in the binary and tests
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod process;

pub use domain::{LineItem, Ticket, TicketDataset};
