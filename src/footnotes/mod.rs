//! Footnote module
//!
//! Replaces annotated spans of a message with `[n]` markers and collects the
//! matching citation lines. Annotations are processed by descending start
//! offset so each replacement leaves the offsets of the remaining spans intact.

use crate::models::{Annotation, TextValue};

/// A numbered citation line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// 1-based footnote number
    pub index: usize,
    /// "<title>: <url>"
    pub label: String,
}

/// Message text with footnote markers applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnoted {
    pub text: String,
    pub citations: Vec<Citation>,
    /// Annotations that were numbered but had no usable span
    pub skipped: usize,
}

/// Apply footnote markers to a text value
///
/// Every annotation receives a number, including ones without a
/// `url_citation`; only annotations carrying one yield a `Citation`.
pub fn footnote(text: &TextValue) -> Footnoted {
    let mut message_text = text.value.clone();
    let mut citations = Vec::new();
    let mut skipped = 0;

    for (index, annotation) in sorted_by_start_desc(&text.annotations)
        .into_iter()
        .enumerate()
        .map(|(i, a)| (i + 1, a))
    {
        match annotation.span() {
            Some((start, end)) => {
                message_text = splice(&message_text, start, end, &format!("[{}]", index));
            }
            None => skipped += 1,
        }

        if let Some(citation) = &annotation.url_citation {
            citations.push(Citation {
                index,
                label: citation.label(),
            });
        }
    }

    Footnoted {
        text: message_text,
        citations,
        skipped,
    }
}

/// Stable sort, highest `start_index` first, missing offsets last
fn sorted_by_start_desc(annotations: &[Annotation]) -> Vec<&Annotation> {
    let mut sorted: Vec<&Annotation> = annotations.iter().collect();
    sorted.sort_by(|a, b| b.start_index.cmp(&a.start_index));
    sorted
}

/// Replace chars `start..end` of `text` with `marker`
///
/// Offsets past the end clamp to the end. When `end < start` the chars
/// between them appear on both sides of the marker.
fn splice(text: &str, start: usize, end: usize, marker: &str) -> String {
    let head = &text[..byte_offset(text, start)];
    let tail = &text[byte_offset(text, end)..];

    let mut out = String::with_capacity(head.len() + marker.len() + tail.len());
    out.push_str(head);
    out.push_str(marker);
    out.push_str(tail);
    out
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
