// Shared prompt fragments for JSON-mode generation.
// Each feature that calls the model keeps its own prompts.rs alongside it.

/// Output rule appended to every JSON-mode system instruction.
pub const JSON_ONLY_INSTRUCTION: &str = "OUTPUT REQUIREMENT:
You must output ONLY valid JSON. Do not wrap it in markdown code blocks. Do not include conversational filler.";

/// Fixed sampling temperature for restructuring tasks.
pub const RESTRUCTURE_TEMPERATURE: f32 = 0.7;
