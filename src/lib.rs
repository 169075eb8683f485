// Medgate - Medical triage gatekeeper proxy
// Library exports

// Core modules
pub mod agent; // Agent abstraction + Azure OpenAI implementation
pub mod cli;
pub mod config;
pub mod prompts;
pub mod triage; // Routing core
