use crate::model::protein::SequenceRecord;
use log::debug;

/// First character of every header line.
pub const RECORD_MARKER: char = '>';

/// Residues per line used by `write_fasta` callers that do not care.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Record being accumulated between two header lines.
struct OpenRecord {
    name: String,
    description: String,
    sequence: String,
}

impl OpenRecord {
    fn from_header(header: &str) -> Self {
        let header = header.trim();
        let (name, description) = match header.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (header, ""),
        };
        Self {
            name: name.to_string(),
            description: description.to_string(),
            sequence: String::new(),
        }
    }

    fn finish(self, records: &mut Vec<SequenceRecord>) {
        if self.name.is_empty() {
            debug!(
                "event=fasta_record_dropped module=fasta reason=empty_name residues={}",
                self.sequence.len()
            );
            return;
        }
        if self.sequence.is_empty() {
            debug!(
                "event=fasta_record_dropped module=fasta reason=empty_sequence name={}",
                self.name
            );
            return;
        }
        records.push(SequenceRecord {
            name: self.name,
            description: self.description,
            sequence: self.sequence,
        });
    }
}

/// Parses concatenated FASTA entries in input order.
///
/// Headers open a record; every other line is trimmed and appended to the
/// open record. Records that end with no residues or carry a blank header
/// are dropped, as are lines that appear before the first header.
pub fn parse_fasta(text: &str) -> Vec<SequenceRecord> {
    let mut records = Vec::new();
    let mut open: Option<OpenRecord> = None;

    for line in text.lines() {
        if let Some(header) = line.strip_prefix(RECORD_MARKER) {
            if let Some(previous) = open.take() {
                previous.finish(&mut records);
            }
            open = Some(OpenRecord::from_header(header));
            continue;
        }

        if let Some(current) = open.as_mut() {
            current.sequence.push_str(line.trim());
        }
    }

    if let Some(last) = open {
        last.finish(&mut records);
    }

    records
}

/// Renders records as FASTA text, wrapping sequences at `width` residues.
///
/// A `width` of zero writes each sequence on one line.
pub fn write_fasta(records: &[SequenceRecord], width: usize) -> String {
    let mut out = String::new();
    for record in records {
        out.push(RECORD_MARKER);
        out.push_str(&record.name);
        if !record.description.is_empty() {
            out.push(' ');
            out.push_str(&record.description);
        }
        out.push('\n');

        if width == 0 {
            out.push_str(&record.sequence);
            out.push('\n');
            continue;
        }

        let residues: Vec<char> = record.sequence.chars().collect();
        for chunk in residues.chunks(width) {
            out.extend(chunk.iter());
            out.push('\n');
        }
    }
    out
}
