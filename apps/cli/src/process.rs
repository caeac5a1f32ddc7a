use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Serialize;

use crate::config::BuildConfig;
use crate::domain::TicketDataset;
use crate::extract::{extract_ticket, read_rows};

/// Outcome of one builder run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_seen: usize,
    pub files_skipped: usize,
    pub customers: usize,
    pub tickets: usize,
    pub output: Option<PathBuf>,
}

/// Lists `*.csv` and `*.CSV` files directly inside `dir`, sorted by name.
/// A missing directory has no exports.
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "input directory does not exist");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).wrap_err_with(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "csv" || ext == "CSV");
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Extracts every readable export into a dataset; returns it with the
/// number of files that had to be skipped
pub fn collect_tickets(files: &[PathBuf]) -> (TicketDataset, usize) {
    let mut dataset = TicketDataset::new();
    let mut skipped = 0;

    for file in files {
        tracing::info!(file = %file.display(), "processing");

        let rows = match read_rows(file) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("{e}");
                skipped += 1;
                continue;
            }
        };

        let ticket = extract_ticket(&rows);
        tracing::info!(
            ticket = ticket.ticket_key(),
            customer = ticket.customer_key(),
            line_items = ticket.line_items.len(),
            "extracted"
        );
        tracing::debug!(?ticket);

        dataset.insert(ticket);
    }

    (dataset, skipped)
}

/// Scans the input directory and writes the grouped dataset
pub fn build_dataset(config: &BuildConfig) -> Result<RunSummary> {
    let files = find_csv_files(&config.input_dir)?;
    let mut summary = RunSummary {
        files_seen: files.len(),
        files_skipped: 0,
        customers: 0,
        tickets: 0,
        output: None,
    };

    if files.is_empty() {
        tracing::warn!(dir = %config.input_dir.display(), "no CSV files found");
        return Ok(summary);
    }

    let (dataset, skipped) = collect_tickets(&files);
    summary.files_skipped = skipped;
    summary.customers = dataset.customer_count();
    summary.tickets = dataset.ticket_count();

    if dataset.is_empty() {
        tracing::warn!("no data was processed");
        return Ok(summary);
    }

    write_dataset(&dataset, &config.output_file)?;
    tracing::info!(output = %config.output_file.display(), "data saved");
    summary.output = Some(config.output_file.clone());

    Ok(summary)
}

fn write_dataset(dataset: &TicketDataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = dataset.to_json()?;
    fs::write(path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &Path) -> BuildConfig {
        BuildConfig {
            input_dir: dir.join("TKT"),
            output_file: dir.join("out").join("ticket_data.json"),
            debug: false,
        }
    }

    fn write_export(dir: &Path, name: &str, contents: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_find_csv_files_filters_and_sorts() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();
        write_export(dir, "b.CSV", "");
        write_export(dir, "a.csv", "");
        write_export(dir, "c.txt", "");
        write_export(dir, "d.Csv", "");
        fs::create_dir(dir.join("nested.csv")).unwrap();

        let names: Vec<_> = find_csv_files(dir)
            .unwrap()
            .iter()
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .collect();

        assert_eq!(names, vec!["a.csv", "b.CSV"]);
    }

    #[test]
    fn test_missing_directory_has_no_files() {
        let temp = tempfile::tempdir().unwrap();
        let files = find_csv_files(&temp.path().join("absent")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_build_dataset_writes_grouped_json() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_for(temp.path());
        write_export(
            &config.input_dir,
            "001.csv",
            "tn_TicketNumber,TKT1\nCustName8,EP-7\nNotes,Gate 4\nItem Description,Qty\nGravel,2\n",
        );
        write_export(
            &config.input_dir,
            "002.csv",
            "tn_TicketNumber,TKT2\nCustName8,EP-7\n",
        );
        write_export(&config.input_dir, "003.csv", "tn_TicketNumber,TKT3\n");

        let summary = build_dataset(&config).unwrap();

        assert_eq!(summary.files_seen, 3);
        assert_eq!(summary.files_skipped, 0);
        assert_eq!(summary.customers, 2);
        assert_eq!(summary.tickets, 3);
        assert_eq!(summary.output.as_deref(), Some(config.output_file.as_path()));

        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&config.output_file).unwrap()).unwrap();
        assert_eq!(written["EP-7"]["TKT1"]["Notes"], "Gate 4");
        assert_eq!(written["EP-7"]["TKT1"]["LineItems"][0]["ItemDescription"], "Gravel");
        assert_eq!(written["EP-7"]["TKT1"]["LineItems"][0]["Qty"], "2");
        assert_eq!(written["EP-7"]["TKT2"]["LineItems"], serde_json::json!([]));
        assert_eq!(written["Unknown"]["TKT3"]["tn_TicketNumber"], "TKT3");
    }

    #[test]
    fn test_unreadable_export_is_skipped() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_for(temp.path());
        write_export(&config.input_dir, "good.csv", "tn_TicketNumber,TKT5\nCustName8,EP-1\n");
        fs::write(config.input_dir.join("bad.csv"), [0xff_u8, 0xfe, 0xfd]).unwrap();

        let summary = build_dataset(&config).unwrap();

        assert_eq!(summary.files_seen, 2);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.tickets, 1);
    }

    #[test]
    fn test_no_exports_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_for(temp.path());
        fs::create_dir_all(&config.input_dir).unwrap();

        let summary = build_dataset(&config).unwrap();

        assert_eq!(summary.files_seen, 0);
        assert!(summary.output.is_none());
        assert!(!config.output_file.exists());
    }

    #[test]
    fn test_only_unreadable_exports_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_for(temp.path());
        write_export(&config.input_dir, "bad.csv", "");
        fs::write(config.input_dir.join("bad.csv"), [0xc3_u8, 0x28]).unwrap();

        let summary = build_dataset(&config).unwrap();

        assert_eq!(summary.files_skipped, 1);
        assert!(summary.output.is_none());
        assert!(!config.output_file.exists());
    }
}
