//! Persistence layer: connection pool lifecycle and read-only PostgreSQL
//! queries over the external call-center schema.
//!
//! The pool is the only shared mutable resource in the process. It is
//! constructed once at startup, passed down explicitly, and drained at
//! shutdown — never an implicit singleton.

pub mod models;
pub mod pool;
pub mod postgres;

pub use postgres::PgStore;
