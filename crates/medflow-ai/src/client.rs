//! Generative-model client.
//!
//! [`GenerativeModel`] is the seam: the real [`GeminiClient`] posts to
//! the Generative Language API over blocking HTTP, and [`MockModel`]
//! stands in for tests. Calls are plain request/response with no retry,
//! caching, or local fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Model used for data-grounded clinic queries.
pub const QUERY_MODEL: &str = "gemini-3-pro-preview";
/// Model used for maps-grounded facility search.
pub const MAPS_MODEL: &str = "gemini-2.5-flash";
/// Model used for practice-health summaries.
pub const SUMMARY_MODEL: &str = "gemini-3-flash-preview";

/// Delegate errors.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    #[error("missing API credential: set {0}")]
    MissingCredential(&'static str),
}

pub type AiResult<T> = Result<T, AiError>;

/// A geographic position for localized queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    /// Ask for maps grounding, with or without a position.
    pub maps_grounding: bool,
    /// When set, maps grounding is focused around this point.
    pub location: Option<GeoPoint>,
}

impl GenerationRequest {
    pub fn new(model: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            prompt,
            system_instruction: None,
            temperature: None,
            maps_grounding: false,
            location: None,
        }
    }
}

/// A grounded facility link returned alongside an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceLink {
    pub title: String,
    pub uri: String,
}

/// Text answer plus any grounding links.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    pub text: String,
    pub links: Vec<PlaceLink>,
}

/// The model seam.
pub trait GenerativeModel {
    fn generate(&self, request: &GenerationRequest) -> AiResult<GenerationResponse>;
}

// =========================================================================
// Wire types (Generative Language API)
// =========================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<WireTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<WireToolConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    parts: Vec<WirePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct WireGenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    google_maps: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireToolConfig {
    retrieval_config: WireRetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRetrievalConfig {
    lat_lng: WireLatLng,
}

#[derive(Debug, Serialize)]
struct WireLatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireContent>,
    grounding_metadata: Option<WireGroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<WireGroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct WireGroundingChunk {
    maps: Option<WireMapsChunk>,
}

#[derive(Debug, Deserialize)]
struct WireMapsChunk {
    title: Option<String>,
    uri: String,
}

// =========================================================================
// GeminiClient
// =========================================================================

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Blocking HTTP client for the Generative Language API.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Read the API credential from the environment.
    pub fn from_env() -> AiResult<Self> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| AiError::MissingCredential(API_KEY_VAR))?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn build_body(request: &GenerationRequest) -> WireRequest {
        WireRequest {
            contents: vec![WireContent {
                parts: vec![WirePart {
                    text: request.prompt.clone(),
                }],
            }],
            system_instruction: request.system_instruction.as_ref().map(|text| WireContent {
                parts: vec![WirePart { text: text.clone() }],
            }),
            generation_config: request
                .temperature
                .map(|temperature| WireGenerationConfig { temperature }),
            tools: request.maps_grounding.then(|| {
                vec![WireTool {
                    google_maps: serde_json::json!({}),
                }]
            }),
            tool_config: request.location.map(|point| WireToolConfig {
                retrieval_config: WireRetrievalConfig {
                    lat_lng: WireLatLng {
                        latitude: point.latitude,
                        longitude: point.longitude,
                    },
                },
            }),
        }
    }
}

impl GenerativeModel for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> AiResult<GenerationResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, request.model, self.api_key
        );
        debug!(model = %request.model, localized = request.location.is_some(), "dispatching generation request");

        let response: WireResponse = self
            .http
            .post(&url)
            .json(&Self::build_body(request))
            .send()?
            .error_for_status()?
            .json()?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AiError::InvalidResponse("no candidates returned".into()))?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let links = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.maps)
                    .map(|maps| PlaceLink {
                        title: maps.title.unwrap_or_else(|| "Facility Link".into()),
                        uri: maps.uri,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(GenerationResponse { text, links })
    }
}

// =========================================================================
// MockModel
// =========================================================================

/// Canned model for testing without network access.
pub struct MockModel {
    pub reply: String,
    pub links: Vec<PlaceLink>,
    /// When set, every call fails as if the service were unreachable.
    pub fail: bool,
}

impl MockModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            links: Vec::new(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            links: Vec::new(),
            fail: true,
        }
    }
}

impl GenerativeModel for MockModel {
    fn generate(&self, _request: &GenerationRequest) -> AiResult<GenerationResponse> {
        if self.fail {
            return Err(AiError::InvalidResponse("mock service unavailable".into()));
        }
        Ok(GenerationResponse {
            text: self.reply.clone(),
            links: self.links.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_minimal() {
        let request = GenerationRequest::new(QUERY_MODEL, "How many sittings?".into());
        let body = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "How many sittings?");
        assert!(body.get("systemInstruction").is_none());
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_body_with_instruction_and_temperature() {
        let mut request = GenerationRequest::new(QUERY_MODEL, "q".into());
        request.system_instruction = Some("You are MedFlow AI.".into());
        request.temperature = Some(0.25);
        let body = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are MedFlow AI."
        );
        assert_eq!(body["generationConfig"]["temperature"], 0.25);
    }

    #[test]
    fn test_body_with_location_requests_maps_grounding() {
        let mut request = GenerationRequest::new(MAPS_MODEL, "clinics near me".into());
        request.maps_grounding = true;
        request.location = Some(GeoPoint {
            latitude: 19.076,
            longitude: 72.8777,
        });
        let body = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert!(body["tools"][0].get("googleMaps").is_some());
        assert_eq!(
            body["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            19.076
        );
    }

    #[test]
    fn test_body_maps_grounding_without_position() {
        // A facility search with no position is still maps-grounded,
        // just not focused on a point.
        let mut request = GenerationRequest::new(MAPS_MODEL, "clinics near me".into());
        request.maps_grounding = true;
        let body = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert!(body["tools"][0].get("googleMaps").is_some());
        assert!(body.get("toolConfig").is_none());
    }

    #[test]
    fn test_parse_response_with_links() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Two clinics found."}]},
                "groundingMetadata": {"groundingChunks": [
                    {"maps": {"title": "Smile Dental", "uri": "https://maps.example/1"}},
                    {"maps": {"uri": "https://maps.example/2"}},
                    {"maps": null}
                ]}
            }]
        }"#;
        let response: WireResponse = serde_json::from_str(json).unwrap();
        let candidate = response.candidates.into_iter().next().unwrap();
        let chunks = candidate.grounding_metadata.unwrap().grounding_chunks;
        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks[0].maps.as_ref().unwrap().title.as_deref(),
            Some("Smile Dental")
        );
        assert!(chunks[1].maps.as_ref().unwrap().title.is_none());
        assert!(chunks[2].maps.is_none());
    }

    #[test]
    fn test_mock_model() {
        let model = MockModel::replying("₹2,500 collected.");
        let response = model
            .generate(&GenerationRequest::new(QUERY_MODEL, "revenue?".into()))
            .unwrap();
        assert_eq!(response.text, "₹2,500 collected.");

        let failing = MockModel::failing();
        assert!(failing
            .generate(&GenerationRequest::new(QUERY_MODEL, "revenue?".into()))
            .is_err());
    }
}
