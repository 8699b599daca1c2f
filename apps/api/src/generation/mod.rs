// Lesson generation: prompts, the LLM round trip, and parsing of the generated
// text into lesson fields. All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
