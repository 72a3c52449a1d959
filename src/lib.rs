pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ChatCompletionAdvisor;
pub use api::{create_router, AppState};
pub use config::{AppConfig, CliConfig};
pub use self::core::{engine::SwapEngine, parser::IntentParser};
pub use utils::error::{Result, SwapError};
