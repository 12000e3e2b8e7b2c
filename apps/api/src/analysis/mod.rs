// Résumé / job-description analysis.
// Implements: request validation, prompt construction, completion extraction,
// optional report schema check. All upstream calls go through llm_client.

pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod validation;
