use crate::error::LoadError;
use crate::model::TicketDataset;
use crate::view_model::{ticket_listing, TicketListing};

pub const LOAD_FAILED: &str = "Failed to load ticket data. Please check the console for details.";
pub const NO_EPOD_DATA: &str = "No EPOD data found in the JSON file.";
pub const SELECT_PROMPT: &str = "Select an EPOD to view its tickets.";

/// What the empty-state element shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Prompt,
    Error(&'static str),
}

/// Everything the page needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub placeholder: Placeholder,
    pub placeholder_hidden: bool,
    pub results_hidden: bool,
    pub listing: Option<TicketListing>,
}

/// Owns the loaded dataset and the current EPOD selection
#[derive(Debug, Default)]
pub struct PageController {
    dataset: Option<TicketDataset>,
    error: Option<&'static str>,
    selected: Option<String>,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the outcome of the one-time fetch
    pub fn finish_load(&mut self, result: Result<TicketDataset, LoadError>) {
        match result {
            Ok(dataset) if dataset.is_empty() => {
                self.error = Some(NO_EPOD_DATA);
                self.dataset = Some(dataset);
            }
            Ok(dataset) => {
                self.error = None;
                self.dataset = Some(dataset);
            }
            Err(_) => {
                self.error = Some(LOAD_FAILED);
                self.dataset = None;
            }
        }
        self.selected = None;
    }

    #[cfg(test)]
    pub fn dataset(&self) -> Option<&TicketDataset> {
        self.dataset.as_ref()
    }

    /// Dropdown options, empty until a non-empty dataset has loaded
    pub fn epod_ids(&self) -> Vec<String> {
        if self.error.is_some() {
            return Vec::new();
        }
        self.dataset
            .iter()
            .flat_map(|dataset| dataset.epod_ids())
            .map(str::to_string)
            .collect()
    }

    /// An empty value clears the selection
    pub fn select(&mut self, value: &str) {
        if value.is_empty() {
            self.selected = None;
        } else if self.dataset.is_some() && self.error.is_none() {
            self.selected = Some(value.to_string());
        }
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn view(&self) -> PageView {
        if let Some(message) = self.error {
            return PageView {
                placeholder: Placeholder::Error(message),
                placeholder_hidden: false,
                results_hidden: true,
                listing: None,
            };
        }

        match (self.dataset.as_ref(), self.selected.as_deref()) {
            (Some(dataset), Some(epod)) => PageView {
                placeholder: Placeholder::Prompt,
                placeholder_hidden: true,
                results_hidden: false,
                listing: Some(ticket_listing(dataset, epod)),
            },
            _ => PageView {
                placeholder: Placeholder::Prompt,
                placeholder_hidden: false,
                results_hidden: true,
                listing: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(json: &str) -> PageController {
        let mut page = PageController::new();
        page.finish_load(TicketDataset::from_json(json).map_err(LoadError::from));
        page
    }

    #[test]
    fn test_before_load_shows_prompt_and_no_options() {
        let page = PageController::new();
        let view = page.view();

        assert!(page.epod_ids().is_empty());
        assert_eq!(view.placeholder, Placeholder::Prompt);
        assert!(!view.placeholder_hidden);
        assert!(view.results_hidden);
    }

    #[test]
    fn test_options_follow_dataset_order() {
        let page = loaded(r#"{"EP-3": {}, "EP-1": {}, "EP-2": {}}"#);

        assert_eq!(page.epod_ids(), vec!["EP-3", "EP-1", "EP-2"]);
        assert_eq!(page.view().placeholder, Placeholder::Prompt);
    }

    #[test]
    fn test_selecting_shows_results_and_hides_placeholder() {
        let mut page = loaded(r#"{"E1": {"T1": {}, "T2": {}}}"#);
        page.select("E1");
        let view = page.view();

        assert_eq!(page.selected(), Some("E1"));
        assert!(view.placeholder_hidden);
        assert!(!view.results_hidden);
        let Some(TicketListing::Cards(cards)) = view.listing else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_clearing_selection_restores_placeholder() {
        let mut page = loaded(r#"{"E1": {"T1": {}}}"#);
        page.select("E1");
        page.select("");
        let view = page.view();

        assert_eq!(page.selected(), None);
        assert!(!view.placeholder_hidden);
        assert!(view.results_hidden);
        assert_eq!(view.listing, None);
    }

    #[test]
    fn test_selecting_epod_without_tickets_shows_message() {
        let mut page = loaded(r#"{"E1": {}}"#);
        page.select("E1");

        assert_eq!(page.view().listing, Some(TicketListing::NoTickets));
    }

    #[test]
    fn test_empty_dataset_shows_no_data_message() {
        let mut page = loaded("{}");
        page.select("E1");
        let view = page.view();

        assert!(page.epod_ids().is_empty());
        assert_eq!(page.selected(), None);
        assert_eq!(view.placeholder, Placeholder::Error(NO_EPOD_DATA));
        assert!(!view.placeholder_hidden);
        assert!(view.results_hidden);
    }

    #[test]
    fn test_failed_load_shows_error_and_hides_results() {
        let mut page = PageController::new();
        page.finish_load(Err(LoadError::Status(404)));
        let view = page.view();

        assert!(page.dataset().is_none());
        assert!(page.epod_ids().is_empty());
        assert_eq!(view.placeholder, Placeholder::Error(LOAD_FAILED));
        assert!(!view.placeholder_hidden);
        assert!(view.results_hidden);
        assert_eq!(view.listing, None);
    }

    #[test]
    fn test_malformed_json_is_a_load_failure() {
        let page = loaded(r#"{"E1": "#);

        assert!(page.dataset().is_none());
        assert_eq!(page.view().placeholder, Placeholder::Error(LOAD_FAILED));
    }
}
