//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate aggregate mutations into use-case level APIs.
//! - Own the explicit save boundary after each successful mutation.

pub mod task_list_service;
