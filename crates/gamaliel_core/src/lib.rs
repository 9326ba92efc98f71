//! Core data types for the Gamaliel API SDK.
//!
//! This crate provides the foundation data types shared across the Gamaliel workspace.

mod role;
mod message;
mod passage;
mod options;
mod request;
mod token_usage;

pub use role::Role;
pub use message::{Message, MessageBuilder};
pub use passage::{Passage, PassageBuilder};
pub use options::{StudyOptions, StudyOptionsBuilder};
pub use request::{
    StudyRequest, StudyRequestBuilder, StudyResponse, StudyResponseBuilder,
};
pub use token_usage::TokenUsageData;
