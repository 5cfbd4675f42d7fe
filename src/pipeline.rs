//! Extract → validate → verify → annotate.

use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::annotation::{TagSpan, annotate};
use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::UrlReport;
use crate::discovery::{Extractor, UrlExtractor};
use crate::reporting::logging;
use crate::source::{TextSource, error_text};
use crate::validation::{HttpVerifier, ProbeUrl, is_valid_url};

/// The result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// The response text with tags inserted
    pub annotated: String,
    /// One entry per distinct probed URL, in order of first appearance
    pub urls: Vec<UrlReport>,
}

impl Annotation {
    pub fn verified_count(&self) -> usize {
        self.urls.iter().filter(|r| r.verdict.is_verified()).count()
    }

    pub fn unverified_count(&self) -> usize {
        self.urls.len() - self.verified_count()
    }

    pub fn has_unverified(&self) -> bool {
        self.unverified_count() > 0
    }
}

pub struct Pipeline<P> {
    extractor: Extractor,
    prober: P,
}

impl Pipeline<HttpVerifier> {
    /// A pipeline probing over HTTP with the given settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpVerifier::new(config)?))
    }
}

impl<P: ProbeUrl + Sync> Pipeline<P> {
    pub fn new(prober: P) -> Self {
        Self {
            extractor: Extractor::default(),
            prober,
        }
    }

    /// Annotate every URL in `text`.
    ///
    /// Each distinct cleaned URL is probed once, in order of first
    /// appearance, one request at a time. Candidates that fail the syntax
    /// check are neither probed nor tagged. Never fails.
    pub async fn process(&self, text: &str) -> Annotation {
        let candidates = self.extractor.extract(text);
        let total = candidates.len();

        let mut report_index: FxHashMap<String, usize> = FxHashMap::default();
        let mut urls: Vec<UrlReport> = Vec::new();
        let mut spans = Vec::with_capacity(total);

        for candidate in candidates {
            if !is_valid_url(&candidate.url) {
                debug!("Ignoring malformed URL candidate: {}", candidate.raw);
                continue;
            }

            let index = match report_index.get(&candidate.url) {
                Some(&index) => index,
                None => {
                    let outcome = self.prober.probe(&candidate.url).await;
                    logging::log_url_result(
                        &candidate.url,
                        outcome.status_code,
                        outcome.description.as_deref(),
                    );
                    urls.push(UrlReport::new(candidate.url.clone(), &outcome));
                    report_index.insert(candidate.url.clone(), urls.len() - 1);
                    urls.len() - 1
                }
            };

            let report = &mut urls[index];
            report.occurrences += 1;
            spans.push(TagSpan::for_candidate(&candidate, report.verdict));
        }

        logging::log_url_discovery(urls.len(), spans.len(), total);

        Annotation {
            annotated: annotate(text, spans),
            urls,
        }
    }

    /// Fetch a response from `source` and annotate it.
    ///
    /// A failing source does not abort the run: its error message becomes
    /// the text to annotate.
    pub async fn run_source(&self, source: &dyn TextSource) -> Annotation {
        let text = match source.fetch().await {
            Ok(text) => text,
            Err(err) => {
                logging::log_error(&format!("Source '{}' failed", source.name()), Some(&err));
                error_text(&err)
            }
        };

        self.process(&text).await
    }
}
