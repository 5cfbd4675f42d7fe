// Output rendering for annotation results

use serde::Serialize;

use crate::core::constants::output_formats;
use crate::core::error::{LinktagError, Result};
use crate::core::types::UrlReport;
use crate::pipeline::Annotation;

/// One annotated source, as it appears in JSON output.
#[derive(Debug, Serialize)]
pub struct SourceResult<'a> {
    pub source: &'a str,
    pub annotated: &'a str,
    pub urls: &'a [UrlReport],
    pub verified: usize,
    pub unverified: usize,
}

impl<'a> SourceResult<'a> {
    pub fn new(source: &'a str, annotation: &'a Annotation) -> Self {
        Self {
            source,
            annotated: &annotation.annotated,
            urls: &annotation.urls,
            verified: annotation.verified_count(),
            unverified: annotation.unverified_count(),
        }
    }
}

/// Render annotated sources in the requested format.
///
/// Text output is the annotated text unchanged. With more than one source,
/// each block is preceded by a `> name` header line. JSON output is always
/// an array with one entry per source.
pub fn render(results: &[(String, Annotation)], format: &str) -> Result<String> {
    match format {
        output_formats::TEXT => Ok(render_text(results)),
        output_formats::JSON => render_json(results),
        other => Err(LinktagError::InvalidArgument(format!(
            "Unknown output format '{other}'"
        ))),
    }
}

fn render_text(results: &[(String, Annotation)]) -> String {
    if let [(_, annotation)] = results {
        return annotation.annotated.clone();
    }

    let mut output = String::new();
    for (i, (name, annotation)) in results.iter().enumerate() {
        if i > 0 && !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&format!("> {name}\n"));
        output.push_str(&annotation.annotated);
    }
    output
}

fn render_json(results: &[(String, Annotation)]) -> Result<String> {
    let entries: Vec<SourceResult> = results
        .iter()
        .map(|(name, annotation)| SourceResult::new(name, annotation))
        .collect();

    serde_json::to_string_pretty(&entries)
        .map_err(|e| LinktagError::InvalidArgument(format!("Could not serialize results: {e}")))
}
