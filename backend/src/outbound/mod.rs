//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local repositories guarded by read/write locks.
//!
//! Adapters are thin translators with no business logic; the facade owns
//! validation and referential checks.

pub mod memory;
