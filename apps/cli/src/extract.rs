//! Ticket extraction from a single CSV export.
//!
//! The exports are not tabular: labels and values are scattered over loosely
//! structured rows, followed by a detail section whose header row names the
//! description and quantity columns.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use csv::{ReaderBuilder, StringRecord};
use regex::Regex;

use crate::domain::{LineItem, Ticket};
use crate::error::ProcessError;

/// One CSV record; a blank physical line is an empty row
pub type Row = Vec<String>;

#[allow(clippy::expect_used)]
static TICKET_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TKT\d+").expect("Invalid ticket number regex"));

#[allow(clippy::expect_used)]
static CUSTOMER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"EP-\d+").expect("Invalid customer id regex"));

const DETAIL_HEADERS: [&str; 3] = ["Detail Items", "Item Description", "ItemDescription"];
const NOTES_TERMINATORS: [&str; 2] = ["Detail Items", "Item Description"];

/// Reads an export, tolerating a leading byte-order mark
pub fn read_rows(path: &Path) -> Result<Vec<Row>, ProcessError> {
    let text = fs::read_to_string(path).map_err(|source| ProcessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    parse_rows(text).map_err(|source| ProcessError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits CSV text into ragged rows. Unlike a plain `csv::Reader`, blank
/// lines are kept as empty rows because they terminate multi-line notes.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, csv::Error> {
    let bytes = text.as_bytes();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut record = StringRecord::new();
    let mut rows = Vec::new();
    let mut consumed = 0;

    while reader.read_record(&mut record)? {
        let end = usize::try_from(reader.position().byte())
            .map_or(bytes.len(), |byte| byte.min(bytes.len()));
        let blanks = blank_lines_before(&bytes[..end], consumed);
        rows.extend(std::iter::repeat_with(Row::new).take(blanks));
        rows.push(record.iter().map(str::to_string).collect());
        consumed = end;
    }

    Ok(rows)
}

/// Counts the blank lines the reader skipped between the previous record,
/// which ended at `start`, and the record that ends `read`.
fn blank_lines_before(read: &[u8], start: usize) -> usize {
    let gap = &read[start.min(read.len())..];
    let line_ends = gap
        .iter()
        .take_while(|&&byte| matches!(byte, b'\r' | b'\n'))
        .filter(|&&byte| byte == b'\n')
        .count();

    // the previous record's own terminator may not have been consumed yet
    let terminator_pending = start > 0
        && read.get(start - 1) != Some(&b'\n')
        && matches!(gap.first(), Some(&(b'\r' | b'\n')));

    line_ends.saturating_sub(usize::from(terminator_pending))
}

#[derive(Debug, Default)]
struct DetailSection {
    active: bool,
    description_col: Option<usize>,
    quantity_col: Option<usize>,
}

impl DetailSection {
    fn read_header(&mut self, row: &[String]) {
        self.active = true;
        for (col, cell) in row.iter().enumerate() {
            if cell.contains("Item") || cell.contains("Description") {
                self.description_col = Some(col);
            } else if cell.contains("Qty") {
                self.quantity_col = Some(col);
            }
        }
    }

    fn columns(&self) -> Option<(usize, usize)> {
        if self.active {
            Some((self.description_col?, self.quantity_col?))
        } else {
            None
        }
    }
}

/// Pulls ticket number, customer, notes and line items out of an export
pub fn extract_ticket(rows: &[Row]) -> Ticket {
    let mut ticket = Ticket::default();
    let mut notes = String::new();
    let mut detail = DetailSection::default();

    for (index, row) in rows.iter().enumerate() {
        if row.iter().all(String::is_empty) {
            continue;
        }

        let text = row.join(",");
        let next = rows.get(index + 1);

        if text.contains("tn_TicketNumber") {
            if let Some(number) = labelled_value(&text, next, "TKT", &TICKET_NUMBER) {
                ticket.ticket_number = Some(number);
            }
        }

        if text.contains("CustName8") || text.contains("CustomerName") {
            if let Some(customer) = labelled_value(&text, next, "EP-", &CUSTOMER_ID) {
                ticket.customer = Some(customer);
            }
        }

        if text.contains("Notes") {
            read_notes(rows, index, &mut notes);
        }

        let is_detail_header = mentions_any(&text, &DETAIL_HEADERS);
        if is_detail_header {
            detail.read_header(row);
        }

        if let Some((description_col, quantity_col)) = detail.columns() {
            if index > 0 && !is_detail_header {
                if let Some(item) = line_item(row, description_col, quantity_col) {
                    ticket.line_items.push(item);
                }
            }
        }
    }

    ticket.notes = notes;

    if ticket.ticket_number.is_none() || ticket.customer.is_none() {
        for row in rows {
            let text = row.join(",");
            if ticket.ticket_number.is_none() {
                ticket.ticket_number = first_match(&TICKET_NUMBER, &text);
            }
            if ticket.customer.is_none() {
                ticket.customer = first_match(&CUSTOMER_ID, &text);
            }
        }
    }

    ticket
}

/// A label row carries its value inline or on the following row
fn labelled_value(text: &str, next: Option<&Row>, marker: &str, pattern: &Regex) -> Option<String> {
    let candidate: Cow<'_, str> = if text.contains(marker) {
        Cow::Borrowed(text)
    } else {
        let next = next?.join(",");
        if !next.contains(marker) {
            return None;
        }
        Cow::Owned(next)
    };

    first_match(pattern, &candidate)
}

fn read_notes(rows: &[Row], index: usize, notes: &mut String) {
    let row = &rows[index];

    if row.len() > 1 && row[1..].iter().any(|cell| !cell.is_empty()) {
        *notes = row[1..].join(",").trim().to_string();
    } else {
        let continuation = rows[index + 1..]
            .iter()
            .take_while(|next| !next.is_empty() && !mentions_any(&next.join(","), &NOTES_TERMINATORS));
        for next in continuation {
            notes.push(' ');
            notes.push_str(next.join(",").trim());
        }
    }

    *notes = notes.trim().to_string();
}

fn line_item(row: &[String], description_col: usize, quantity_col: usize) -> Option<LineItem> {
    if row.len() <= description_col.max(quantity_col) {
        return None;
    }

    let description = row[description_col].trim();
    if description.is_empty() || description.starts_with("Item") {
        return None;
    }

    Some(LineItem {
        description: description.to_string(),
        quantity: row[quantity_col].trim().to_string(),
    })
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|found| found.as_str().to_string())
}
