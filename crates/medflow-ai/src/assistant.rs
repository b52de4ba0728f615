//! Query assistant facade.
//!
//! Pass-through delegation to a [`GenerativeModel`]: no retry, no
//! caching, no local fallback. Failures surface to the caller as the
//! fixed offline messages.

use tracing::warn;

use crate::client::{
    AiResult, GenerationRequest, GenerativeModel, GeoPoint, PlaceLink, MAPS_MODEL, QUERY_MODEL,
    SUMMARY_MODEL,
};
use crate::context::{context_json, ContextRecord};
use crate::prompts;

/// Shown when a data query cannot reach the model.
pub const OFFLINE_MESSAGE: &str = "Clinical Intelligence offline. Please check connectivity.";
/// Shown when the model returns an empty answer to a data query.
pub const NO_DATA_MESSAGE: &str = "No relevant data found in current patient database.";
/// Shown when a facility search cannot reach the model.
pub const SEARCH_UNAVAILABLE_MESSAGE: &str = "Location-based medical search unavailable.";
/// Default heading for a facility search that returned only links.
pub const FACILITIES_MAPPED_MESSAGE: &str = "Nearby facilities mapped:";
/// Shown when a summary is requested over an empty case registry.
pub const EMPTY_SUMMARY_MESSAGE: &str = "No treatment sessions available for analysis.";
/// Shown when summary generation fails.
pub const SUMMARY_PAUSED_MESSAGE: &str = "Summary generation paused.";

/// Summaries look at the most recent records only.
const SUMMARY_RECORD_LIMIT: usize = 30;

/// Answer to a localized facility search.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedAnswer {
    pub text: String,
    pub links: Vec<PlaceLink>,
}

/// The AI query delegate.
pub struct Assistant<M: GenerativeModel> {
    model: M,
}

impl<M: GenerativeModel> Assistant<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Answer a natural-language question grounded in the supplied
    /// treatment records.
    pub fn ask(&self, question: &str, records: &[ContextRecord]) -> String {
        match self.ask_inner(question, records) {
            Ok(text) if text.is_empty() => NO_DATA_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "clinic data query failed");
                OFFLINE_MESSAGE.to_string()
            }
        }
    }

    fn ask_inner(&self, question: &str, records: &[ContextRecord]) -> AiResult<String> {
        let context = context_json(records)
            .map_err(|e| crate::client::AiError::InvalidResponse(e.to_string()))?;
        let mut request = GenerationRequest::new(QUERY_MODEL, question.to_string());
        request.system_instruction = Some(prompts::build_query_instruction(&context));
        request.temperature = Some(0.1);
        Ok(self.model.generate(&request)?.text)
    }

    /// Search for nearby medical facilities. Localization is best
    /// effort: with no position the search still runs maps-grounded,
    /// just not focused on a point.
    pub fn ask_with_location(&self, question: &str, position: Option<GeoPoint>) -> LocatedAnswer {
        let mut request = GenerationRequest::new(MAPS_MODEL, question.to_string());
        request.maps_grounding = true;
        request.location = position;

        match self.model.generate(&request) {
            Ok(response) => LocatedAnswer {
                text: if response.text.is_empty() {
                    FACILITIES_MAPPED_MESSAGE.to_string()
                } else {
                    response.text
                },
                links: response.links,
            },
            Err(e) => {
                warn!(error = %e, "facility search failed");
                LocatedAnswer {
                    text: SEARCH_UNAVAILABLE_MESSAGE.to_string(),
                    links: Vec::new(),
                }
            }
        }
    }

    /// Produce a practice-health summary over the most recent records.
    pub fn summarize(&self, records: &[ContextRecord]) -> String {
        if records.is_empty() {
            return EMPTY_SUMMARY_MESSAGE.to_string();
        }

        let window = &records[..records.len().min(SUMMARY_RECORD_LIMIT)];
        let result = context_json(window)
            .map_err(|e| crate::client::AiError::InvalidResponse(e.to_string()))
            .and_then(|records_json| {
                let mut request =
                    GenerationRequest::new(SUMMARY_MODEL, prompts::build_summary_prompt(&records_json));
                request.system_instruction = Some(prompts::SUMMARY_SYSTEM_INSTRUCTION.to_string());
                self.model.generate(&request)
            });

        match result {
            Ok(response) => response.text,
            Err(e) => {
                warn!(error = %e, "summary generation failed");
                SUMMARY_PAUSED_MESSAGE.to_string()
            }
        }
    }
}
