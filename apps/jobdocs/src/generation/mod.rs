// Document generation: JD prompt configuration, the per-row pipeline,
// and the HTTP handlers that trigger it.
// All LLM calls go through llm_client, no direct HTTP calls here.

pub mod handlers;
pub mod jd_prompt;
pub mod pipeline;
pub mod prompts;
