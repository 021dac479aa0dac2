// Multi-lens case study: generation, content store, and derived views.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod sections;
pub mod store;
