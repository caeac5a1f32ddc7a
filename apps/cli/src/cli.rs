use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "epod-tickets",
    version,
    about = "Build the EPOD ticket dataset from CSV exports"
)]
pub struct CliArgs {
    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the directory scanned for CSV exports
    #[arg(long = "input-dir", value_name = "PATH")]
    pub input_dir: Option<String>,

    /// Override the dataset output file
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(dir) = &self.input_dir {
            std::env::set_var("TICKET_DIR", dir);
        }
        if let Some(output) = &self.output {
            std::env::set_var("TICKET_OUTPUT", output);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
