//! Line codec for the score file.
//!
//! Records are `timestamp,username,score` with CSV double-quote escaping.
//! Fields containing the delimiter, a quote or a line break are quoted and
//! inner quotes are doubled.

use std::io::Read;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::warn;

use crate::error::{Error, Result};
use crate::storage::ScoreEntry;

const HEADER_FIELDS: [&str; 3] = ["timestamp", "username", "score"];
const HEADER_MARKER: &str = "timestamp";

/// Header row terminated by a newline
pub fn header_line(delimiter: u8) -> String {
    let separator = (delimiter as char).to_string();
    let mut line = HEADER_FIELDS.join(separator.as_str());
    line.push('\n');
    line
}

/// Serialize one entry into a single newline-terminated line
pub fn encode_record(entry: &ScoreEntry, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());

    let score = entry.score.to_string();
    writer.write_record([
        entry.timestamp.as_str(),
        entry.username.as_str(),
        score.as_str(),
    ])?;

    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Decode every valid record from `reader`.
///
/// Malformed rows are logged and skipped. A quote left open until end of
/// input only discards the line it opens on. Only I/O failures are
/// returned as errors.
pub fn decode_records<R: Read>(mut reader: R, delimiter: u8) -> Result<Vec<ScoreEntry>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let lines: Vec<&[u8]> = content.split_inclusive(|&b| b == b'\n').collect();
    let ends = record_ends(&lines);

    let mut builder = ReaderBuilder::new();
    builder.delimiter(delimiter).has_headers(false).flexible(true);

    let mut entries = Vec::new();
    let mut first = true;
    let mut start = 0;

    while start < lines.len() {
        let line_no = start + 1;
        let Some(end) = ends[start] else {
            warn!("Skipping score row with unclosed quote at line {}", line_no);
            start += 1;
            continue;
        };
        let chunk = lines[start..end].concat();
        start = end;

        if chunk.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        for result in builder.from_reader(chunk.as_slice()).records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable score row at line {}: {}", line_no, e);
                    first = false;
                    continue;
                }
            };

            if std::mem::take(&mut first) && is_header(&record) {
                continue;
            }

            match parse_record(&record) {
                Some(entry) => entries.push(entry),
                None => warn!("Skipping malformed score row at line {}", line_no),
            }
        }
    }

    Ok(entries)
}

/// For each line, the exclusive end of the record starting there.
///
/// A record extends over following lines until its quote count is even.
/// `None` means the quote opened on that line is never closed.
fn record_ends(lines: &[&[u8]]) -> Vec<Option<usize>> {
    // odd[k]: quote count of lines[..k] is odd
    let mut odd = Vec::with_capacity(lines.len() + 1);
    odd.push(false);
    for (k, line) in lines.iter().enumerate() {
        let quotes = line.iter().filter(|&&b| b == b'"').count();
        odd.push(odd[k] ^ (quotes % 2 == 1));
    }

    // nearest boundary after i with each parity, filled from the back
    let mut next: [Option<usize>; 2] = [None, None];
    let mut ends = vec![None; lines.len()];
    for i in (0..lines.len()).rev() {
        next[odd[i + 1] as usize] = Some(i + 1);
        ends[i] = next[odd[i] as usize];
    }
    ends
}

fn is_header(record: &StringRecord) -> bool {
    record.get(0).is_some_and(|field| {
        field
            .trim_start()
            .to_ascii_lowercase()
            .starts_with(HEADER_MARKER)
    })
}

fn parse_record(record: &StringRecord) -> Option<ScoreEntry> {
    if record.len() < 3 {
        return None;
    }
    let score = record[2].trim().parse::<u32>().ok()?;
    Some(ScoreEntry::new(&record[0], record[1].trim(), score))
}
