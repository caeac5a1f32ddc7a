/// Dataset written by `epod-tickets`, served beside the page
pub const DATA_URL: &str = "ticket_data.json";

pub const EPOD_SELECT_ID: &str = "epod-select";
pub const TICKETS_CONTAINER_ID: &str = "tickets-container";
pub const NO_SELECTION_ID: &str = "no-selection";
