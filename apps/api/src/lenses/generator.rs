//! Lens Generator — turns a raw case-study manuscript into a four-lens `Project`.
//!
//! Stateless: one outbound call, then parse and validate. All LLM traffic goes
//! through `TextGenerator`; nothing here talks to the network directly.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::lenses::prompts::{system_instruction, task_prompt};
use crate::lenses::schema::project_response_schema;
use crate::llm_client::prompts::RESTRUCTURE_TEMPERATURE;
use crate::llm_client::{strip_json_fences, JsonRequest, LlmError, TextGenerator};
use crate::models::Project;

/// User-facing text for every generation failure.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "Failed to generate context lenses. Please check your text and try again.";

/// How the response shape is enforced on the model side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaMode {
    /// Sends an explicit `responseSchema` alongside the instruction.
    #[default]
    Structured,
    /// Relies on the schema spelled out in the system instruction.
    InstructionOnly,
}

impl FromStr for SchemaMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(SchemaMode::Structured),
            "instruction" | "instruction_only" => Ok(SchemaMode::InstructionOnly),
            other => Err(format!(
                "unknown schema mode '{other}' (expected 'structured' or 'instruction')"
            )),
        }
    }
}

impl fmt::Display for SchemaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaMode::Structured => f.write_str("structured"),
            SchemaMode::InstructionOnly => f.write_str("instruction"),
        }
    }
}

/// Everything that can go wrong producing a `Project`. Callers surface all of
/// these as one category; the variant is kept for logs.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("raw text is empty")]
    EmptyInput,

    #[error("generation request failed: {0}")]
    Transport(LlmError),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model response is not a valid project document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model response failed validation: {0}")]
    Invalid(String),
}

impl From<LlmError> for GenerationFailure {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => GenerationFailure::EmptyResponse,
            other => GenerationFailure::Transport(other),
        }
    }
}

/// Checks what serde cannot: every lens must carry a headline.
pub fn validate_project(project: &Project) -> Result<(), GenerationFailure> {
    let blank: Vec<&str> = project
        .lenses
        .iter()
        .filter(|(_, lens)| lens.headline.trim().is_empty())
        .map(|(id, _)| id.as_str())
        .collect();

    if blank.is_empty() {
        Ok(())
    } else {
        Err(GenerationFailure::Invalid(format!(
            "blank headline for lens(es): {}",
            blank.join(", ")
        )))
    }
}

/// Parses model output into a validated `Project`.
pub fn parse_project(text: &str) -> Result<Project, GenerationFailure> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(GenerationFailure::EmptyResponse);
    }
    let project: Project = serde_json::from_str(text)?;
    validate_project(&project)?;
    Ok(project)
}

/// Runs one generation call. Blank input never reaches the model.
///
/// Output is not deterministic: identical input may yield different projects.
pub async fn generate_lenses(
    raw_text: &str,
    llm: &dyn TextGenerator,
    mode: SchemaMode,
) -> Result<Project, GenerationFailure> {
    if raw_text.trim().is_empty() {
        return Err(GenerationFailure::EmptyInput);
    }

    let generation_id = Uuid::new_v4();
    info!(%generation_id, %mode, chars = raw_text.len(), "Generating lenses");

    let system = system_instruction();
    let prompt = task_prompt(raw_text);
    let schema: Option<Value> = match mode {
        SchemaMode::Structured => Some(project_response_schema()),
        SchemaMode::InstructionOnly => None,
    };

    let result = llm
        .generate_json(JsonRequest {
            prompt: &prompt,
            system: &system,
            schema: schema.as_ref(),
            temperature: RESTRUCTURE_TEMPERATURE,
        })
        .await
        .map_err(GenerationFailure::from)
        .and_then(|text| parse_project(&text));

    match &result {
        Ok(project) => info!(%generation_id, title = %project.meta.title, "Lens generation succeeded"),
        Err(e) => error!(%generation_id, "Lens generation failed: {e}"),
    }

    result
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Replays a canned response and records what it was asked.
    pub(crate) struct StubGenerator {
        response: Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>,
        pub calls: AtomicUsize,
        pub last_had_schema: Mutex<Option<bool>>,
        pub last_prompt: Mutex<Option<String>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(text: impl Into<String>) -> Self {
            let text = text.into();
            Self::with(move || Ok(text.clone()))
        }

        pub(crate) fn with(
            response: impl Fn() -> Result<String, LlmError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                response: Box::new(response),
                calls: AtomicUsize::new(0),
                last_had_schema: Mutex::new(None),
                last_prompt: Mutex::new(None),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate_json(&self, request: JsonRequest<'_>) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_had_schema.lock().unwrap() = Some(request.schema.is_some());
            *self.last_prompt.lock().unwrap() = Some(request.prompt.to_string());
            (self.response)()
        }
    }

    pub(crate) fn project_json(title: &str) -> serde_json::Value {
        let lens = |headline: &str, artifact: Option<&str>| {
            let mut value = json!({
                "headline": headline,
                "content": "### A\nfoo\n### B\nbar",
                "reasoning": "I reordered for this audience.",
                "status": "CURATION: TEST",
            });
            if let Some(artifact) = artifact {
                value["artifact"] = json!(artifact);
            }
            value
        };
        json!({
            "meta": {
                "title": title,
                "role": "Staff Designer",
                "timeline": "2023 – 2024",
                "awards": ["Impact Award"],
            },
            "lenses": {
                "recruiter": lens("Recruiter headline", Some("Roadmap")),
                "engineer": lens("Engineer headline", Some("Diagram")),
                "designer": lens("Designer headline", Some("Journey map")),
                "source": lens("Raw record", None),
            }
        })
    }

    #[tokio::test]
    async fn test_well_formed_response_parses() {
        let stub = StubGenerator::replying(project_json("Telemetry Revamp").to_string());
        let project = generate_lenses("We rebuilt telemetry.", &stub, SchemaMode::Structured)
            .await
            .unwrap();

        assert_eq!(project.meta.title, "Telemetry Revamp");
        assert_eq!(project.lenses.engineer.headline, "Engineer headline");
        assert!(project.lenses.source.artifact.is_none());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_not_json_is_malformed() {
        let stub = StubGenerator::replying("not json");
        let err = generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationFailure::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_lens_is_rejected() {
        let mut doc = project_json("T");
        doc["lenses"].as_object_mut().unwrap().remove("designer");
        let stub = StubGenerator::replying(doc.to_string());
        let err = generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationFailure::Malformed(_)));
    }

    #[tokio::test]
    async fn test_extra_lens_is_rejected() {
        let mut doc = project_json("T");
        doc["lenses"]["marketing"] = doc["lenses"]["recruiter"].clone();
        let stub = StubGenerator::replying(doc.to_string());
        let err = generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationFailure::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_lens_field_is_rejected() {
        let mut doc = project_json("T");
        doc["lenses"]["engineer"]
            .as_object_mut()
            .unwrap()
            .remove("reasoning");
        let stub = StubGenerator::replying(doc.to_string());
        assert!(generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_blank_headline_is_invalid() {
        let mut doc = project_json("T");
        doc["lenses"]["source"]["headline"] = json!("   ");
        let stub = StubGenerator::replying(doc.to_string());
        let err = generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap_err();
        match err {
            GenerationFailure::Invalid(msg) => assert!(msg.contains("source")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_response_text() {
        let stub = StubGenerator::replying("  \n");
        let err = generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationFailure::EmptyResponse));

        let stub = StubGenerator::with(|| Err(LlmError::EmptyContent));
        let err = generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationFailure::EmptyResponse));
    }

    #[tokio::test]
    async fn test_api_error_is_transport_failure() {
        let stub = StubGenerator::with(|| {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        });
        let err = generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationFailure::Transport(LlmError::Api { status: 503, .. })));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_never_calls_model() {
        let stub = StubGenerator::replying(project_json("T").to_string());
        for raw in ["", "   ", "\n\t"] {
            let err = generate_lenses(raw, &stub, SchemaMode::Structured)
                .await
                .unwrap_err();
            assert!(matches!(err, GenerationFailure::EmptyInput));
        }
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fenced_json_is_accepted() {
        let fenced = format!("```json\n{}\n```", project_json("Fenced"));
        let stub = StubGenerator::replying(fenced);
        let project = generate_lenses("text", &stub, SchemaMode::InstructionOnly)
            .await
            .unwrap();
        assert_eq!(project.meta.title, "Fenced");
    }

    #[tokio::test]
    async fn test_schema_mode_controls_response_schema() {
        let stub = StubGenerator::replying(project_json("T").to_string());

        generate_lenses("text", &stub, SchemaMode::Structured)
            .await
            .unwrap();
        assert_eq!(*stub.last_had_schema.lock().unwrap(), Some(true));

        generate_lenses("text", &stub, SchemaMode::InstructionOnly)
            .await
            .unwrap();
        assert_eq!(*stub.last_had_schema.lock().unwrap(), Some(false));
    }

    #[tokio::test]
    async fn test_prompt_wraps_raw_text() {
        let stub = StubGenerator::replying(project_json("T").to_string());
        generate_lenses("Our SREs were human routers.", &stub, SchemaMode::Structured)
            .await
            .unwrap();
        let prompt = stub.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.starts_with("Transform this case study text"));
        assert!(prompt.ends_with("Our SREs were human routers."));
    }

    #[test]
    fn test_schema_mode_from_str() {
        assert_eq!("structured".parse::<SchemaMode>().unwrap(), SchemaMode::Structured);
        assert_eq!(
            " Instruction ".parse::<SchemaMode>().unwrap(),
            SchemaMode::InstructionOnly
        );
        assert!("freeform".parse::<SchemaMode>().is_err());
        assert_eq!(SchemaMode::default(), SchemaMode::Structured);
    }

    #[test]
    fn test_seed_project_passes_validation() {
        let project = Project::seed().unwrap();
        assert!(validate_project(&project).is_ok());
    }
}
