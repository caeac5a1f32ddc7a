use indexmap::IndexMap;
use serde::Serialize;

/// Grouping key used when a ticket export carries no customer or ticket number
pub const UNKNOWN: &str = "Unknown";

/// One delivery ticket as written to the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ticket {
    #[serde(rename = "tn_TicketNumber", skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    #[serde(rename = "CustName8", skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "LineItems")]
    pub line_items: Vec<LineItem>,
}

impl Ticket {
    pub fn customer_key(&self) -> &str {
        self.customer.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn ticket_key(&self) -> &str {
        self.ticket_number.as_deref().unwrap_or(UNKNOWN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    #[serde(rename = "ItemDescription")]
    pub description: String,
    #[serde(rename = "Qty")]
    pub quantity: String,
}

/// Customer -> ticket number -> ticket, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TicketDataset(IndexMap<String, IndexMap<String, Ticket>>);

impl TicketDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files the ticket under its customer and ticket number. A ticket with
    /// the same keys replaces the earlier one in place.
    pub fn insert(&mut self, ticket: Ticket) {
        let customer = ticket.customer_key().to_string();
        let number = ticket.ticket_key().to_string();
        self.0.entry(customer).or_default().insert(number, ticket);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn customer_count(&self) -> usize {
        self.0.len()
    }

    pub fn ticket_count(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }

    #[cfg(test)]
    pub fn customers(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub fn ticket(&self, customer: &str, number: &str) -> Option<&Ticket> {
        self.0.get(customer)?.get(number)
    }

    /// Pretty JSON with four-space indentation
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(number: Option<&str>, customer: Option<&str>, notes: &str) -> Ticket {
        Ticket {
            ticket_number: number.map(str::to_string),
            customer: customer.map(str::to_string),
            notes: notes.to_string(),
            line_items: Vec::new(),
        }
    }

    #[test]
    fn test_insert_groups_by_customer_in_first_seen_order() {
        let mut dataset = TicketDataset::new();
        dataset.insert(ticket(Some("TKT2"), Some("EP-9"), ""));
        dataset.insert(ticket(Some("TKT1"), Some("EP-1"), ""));
        dataset.insert(ticket(Some("TKT3"), Some("EP-9"), ""));

        assert_eq!(dataset.customers().collect::<Vec<_>>(), vec!["EP-9", "EP-1"]);
        assert_eq!(dataset.customer_count(), 2);
        assert_eq!(dataset.ticket_count(), 3);
    }

    #[test]
    fn test_insert_replaces_duplicate_ticket_in_place() {
        let mut dataset = TicketDataset::new();
        dataset.insert(ticket(Some("TKT1"), Some("EP-1"), "first"));
        dataset.insert(ticket(Some("TKT2"), Some("EP-1"), ""));
        dataset.insert(ticket(Some("TKT1"), Some("EP-1"), "second"));

        assert_eq!(dataset.ticket_count(), 2);
        let replaced = dataset.ticket("EP-1", "TKT1").map(|t| t.notes.as_str());
        assert_eq!(replaced, Some("second"));
    }

    #[test]
    fn test_missing_keys_group_under_unknown() {
        let mut dataset = TicketDataset::new();
        dataset.insert(ticket(None, None, "orphan"));

        assert!(dataset.ticket(UNKNOWN, UNKNOWN).is_some());
    }

    #[test]
    fn test_to_json_uses_four_space_indent_and_source_field_names() {
        let mut dataset = TicketDataset::new();
        dataset.insert(Ticket {
            ticket_number: Some("TKT1".to_string()),
            customer: Some("EP-1".to_string()),
            notes: "Leave at gate".to_string(),
            line_items: vec![LineItem {
                description: "Gravel".to_string(),
                quantity: "3".to_string(),
            }],
        });

        let json = String::from_utf8(dataset.to_json().unwrap()).unwrap();
        let expected = r#"{
    "EP-1": {
        "TKT1": {
            "tn_TicketNumber": "TKT1",
            "CustName8": "EP-1",
            "Notes": "Leave at gate",
            "LineItems": [
                {
                    "ItemDescription": "Gravel",
                    "Qty": "3"
                }
            ]
        }
    }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_to_json_omits_missing_identifiers() {
        let mut dataset = TicketDataset::new();
        dataset.insert(ticket(None, None, ""));

        let json = String::from_utf8(dataset.to_json().unwrap()).unwrap();
        assert!(!json.contains("tn_TicketNumber"));
        assert!(!json.contains("CustName8"));
        assert!(json.contains("\"Unknown\""));
    }
}
