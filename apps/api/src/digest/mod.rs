// Topic digest: validate a topic, ask the model for a three-part summary,
// and segment the reply for display.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod generator;
pub mod handlers;
pub mod items;
pub mod prompts;
pub mod reply;
pub mod sections;
pub mod topic;
pub mod view;
