use std::ops::Range;

pub const BOLD_OPEN: &str = "<b>";
pub const BOLD_CLOSE: &str = "</b>";

/// A contiguous slice of a label, either matched by the query or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Byte range into the label.
    pub range: Range<usize>,
    pub matched: bool,
}

/// Splits `label` into alternating runs, merging adjacent matched character
/// indices into a single run. `indices` are character positions, strictly
/// increasing; positions past the end of the label are ignored.
#[must_use]
pub fn runs(label: &str, indices: &[usize]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut wanted = indices.iter().peekable();

    for (char_idx, (start, c)) in label.char_indices().enumerate() {
        let matched = wanted.next_if(|&&i| i == char_idx).is_some();
        let end = start + c.len_utf8();
        match runs.last_mut() {
            Some(run) if run.matched == matched => run.range.end = end,
            _ => runs.push(Run {
                range: start..end,
                matched,
            }),
        }
    }

    runs
}

/// Renders `label` with every matched run wrapped in `open`/`close`.
#[must_use]
pub fn to_markup(label: &str, indices: &[usize], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(label.len() + indices.len() * (open.len() + close.len()));
    for run in runs(label, indices) {
        let text = &label[run.range];
        if run.matched {
            out.push_str(open);
            out.push_str(text);
            out.push_str(close);
        } else {
            out.push_str(text);
        }
    }
    out
}

#[must_use]
pub fn to_bold_markup(label: &str, indices: &[usize]) -> String {
    to_markup(label, indices, BOLD_OPEN, BOLD_CLOSE)
}
