//! Prompted-JSON pipeline shared by every AI-backed route:
//! prompt -> completion -> unfence/parse -> schema check, with a per-feature mock on any failure.

pub mod client;
pub mod normalize;
pub mod pipeline;
pub mod prompt;

pub use client::{CompletionClient, OpenRouterClient};
pub use pipeline::{generate, Generated, PromptedFeature};
pub use prompt::{with_schema, FeatureId, Prompt};
