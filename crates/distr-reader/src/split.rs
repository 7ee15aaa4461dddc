use tracing::debug;

use crate::config::Markers;

/// Groups the lines strictly between matching begin/end markers.
///
/// Lines are trimmed before they are compared or stored. A begin marker
/// restarts the current record, so an unterminated record followed by a new
/// begin marker is discarded, as is an unterminated record at the end of the
/// input. Records with no lines are dropped. Lines outside of a record are
/// ignored.
pub fn split_records<'a, I>(lines: I, markers: &Markers) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut inside = false;

    for (line_no, raw) in lines.into_iter().enumerate() {
        let line = raw.trim();
        if line == markers.begin {
            if inside && !current.is_empty() {
                debug!(line = line_no, dropped = current.len(), "begin marker restarts open record");
            }
            current.clear();
            inside = true;
        } else if line == markers.end {
            if inside && !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            inside = false;
        } else if inside {
            current.push(line.to_string());
        }
    }

    if inside && !current.is_empty() {
        debug!(dropped = current.len(), "unterminated record at end of input");
    }
    debug!(records = records.len(), "split input into records");
    records
}
