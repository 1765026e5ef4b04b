// Verse retrieval: prompt building, model call, sanitizing, parsing and the
// curated fallback. All model calls go through llm_client.

pub mod handlers;
pub mod knowledge_base;
pub mod orchestrator;
pub mod prompts;
pub mod response;
pub mod sanitizer;

pub use orchestrator::VerseRetriever;
