// Keyword suggestion and optimisation recommendations.
// All LLM calls go through llm_client — no direct API calls here.

pub mod handlers;
pub mod prompts;
pub mod recommender;
pub mod suggester;

#[cfg(test)]
pub mod testing;
