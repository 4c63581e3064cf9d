//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: `Mutex`-guarded maps for tests and database-less runs.
//! - **persistence**: PostgreSQL repositories using Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business logic.

pub mod memory;
pub mod persistence;
