//! Ticket dataset as served in `ticket_data.json`.
//!
//! Every field is optional on the way in; placeholders are applied when the
//! data is projected into cards, not here.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Ticket number -> ticket, in file order
pub type EpodTickets = IndexMap<String, Ticket>;

/// EPOD -> tickets, in file order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TicketDataset(IndexMap<String, Option<EpodTickets>>);

impl TicketDataset {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn epod_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `None` for an unknown EPOD or one whose tickets are `null`
    pub fn tickets_for(&self, epod: &str) -> Option<&EpodTickets> {
        self.0.get(epod)?.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ticket {
    #[serde(rename = "tn_TicketNumber")]
    pub ticket_number: Option<Scalar>,
    #[serde(rename = "CustName8")]
    pub customer: Option<Scalar>,
    #[serde(rename = "Notes")]
    pub notes: Option<Scalar>,
    #[serde(rename = "LineItems")]
    pub line_items: Option<Vec<LineItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LineItem {
    #[serde(rename = "ItemDescription")]
    pub description: Option<Scalar>,
    #[serde(rename = "Qty")]
    pub quantity: Option<Scalar>,
}

/// A displayable field value. The builder writes strings; hand-edited data
/// may carry numbers or booleans, which render as their JSON text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    /// Values that fall back to a placeholder: empty text, `false` and zero
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Number(number) => number.as_f64().is_some_and(|value| value == 0.0),
            Self::Bool(flag) => !flag,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
