use log::debug;

use crate::core::constants::tags;
use crate::core::types::{Candidate, Verdict};

/// A tag to insert in front of `text[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan {
    pub start: usize,
    pub end: usize,
    pub verdict: Verdict,
}

impl TagSpan {
    pub fn for_candidate(candidate: &Candidate, verdict: Verdict) -> Self {
        Self {
            start: candidate.start,
            end: candidate.end,
            verdict,
        }
    }
}

/// Rewrite `text` with a verdict tag in front of every span.
///
/// Spans are applied in a single left-to-right pass over the original text,
/// so tags never land inside previously inserted text and a URL that is a
/// prefix of another is only tagged where it was actually matched. Spans
/// that overlap an earlier one, or that fall outside `text`, are skipped.
/// Text outside the spans is copied through unchanged.
pub fn annotate(text: &str, mut spans: Vec<TagSpan>) -> String {
    spans.sort_by_key(|span| (span.start, span.end));

    let mut output = String::with_capacity(text.len() + spans.len() * (tags::UNVERIFIED.len() + 1));
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor
            || span.start > span.end
            || span.end > text.len()
            || !text.is_char_boundary(span.start)
            || !text.is_char_boundary(span.end)
        {
            debug!(
                "Skipping span {}..{} (cursor at {cursor})",
                span.start, span.end
            );
            continue;
        }

        output.push_str(&text[cursor..span.start]);
        output.push_str(span.verdict.tag());
        output.push(' ');
        output.push_str(&text[span.start..span.end]);
        cursor = span.end;
    }

    output.push_str(&text[cursor..]);
    output
}

/// Convenience wrapper over [`annotate`] for classified candidates.
pub fn annotate_candidates(text: &str, classified: &[(Candidate, Verdict)]) -> String {
    let spans = classified
        .iter()
        .map(|(candidate, verdict)| TagSpan::for_candidate(candidate, *verdict))
        .collect();

    annotate(text, spans)
}
