pub mod chat;
pub mod config;
pub mod profile;

// Re-export commonly used types for convenience.
pub use chat::{respond, respond_with, Category, ChatSession, Reply};
pub use config::AppConfig;
pub use profile::{default_profile, BusinessProfile};
