//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's gateway would deliver.
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;
mod user;

pub use message::{create_test_message, TestMessage};
