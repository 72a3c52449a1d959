// Adapters layer: concrete implementations for external collaborators.

pub mod chat_completion;

pub use chat_completion::ChatCompletionAdvisor;
