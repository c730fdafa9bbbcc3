//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value contract for loading/saving the aggregate.
//! - Isolate SQLite and serialization details from service orchestration.
//!
//! # Invariants
//! - The aggregate is persisted as one serialized payload under a fixed key.
//! - Load surfaces corrupt payloads as errors; falling back to a default
//!   state is a service-layer decision.

pub mod state_repo;
