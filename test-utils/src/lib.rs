//! Autotranslate Test Utils
//!
//! Provides shared testing utilities for building unit tests for the autotranslate bot.
//! This crate offers a builder pattern for creating test contexts backed by a temporary
//! settings directory, plus factories for serenity models.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary settings file
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_settings_load() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_settings_json(serde_json::json!({
//!             "auto_translate_channels": { "1": ["es"] }
//!         }))
//!         .build()?;
//!
//!     let path = test.settings_path();
//!     // Load settings from `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
