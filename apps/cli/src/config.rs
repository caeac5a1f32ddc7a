use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "TKT";
pub const DEFAULT_OUTPUT_FILE: &str = "ticket_data.json";

/// Where the builder reads ticket exports and writes the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub debug: bool,
}

impl BuildConfig {
    /// Resolves settings through `lookup`, falling back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let input_dir = lookup("TICKET_DIR").map_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR), PathBuf::from);
        let output_file =
            lookup("TICKET_OUTPUT").map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE), PathBuf::from);
        let debug = lookup("DEBUG").is_some_and(|value| !value.is_empty() && value != "0");

        Self {
            input_dir,
            output_file,
            debug,
        }
    }
}

/// Initializes the builder configuration from `.env` and the process environment
pub fn init_build_config() -> BuildConfig {
    // Load environment variables from .env file; existing variables win
    dotenv().ok();

    BuildConfig::from_lookup(|key| env::var(key).ok())
}
