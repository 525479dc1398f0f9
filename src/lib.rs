//! # calldesk-gateway
//!
//! Read-only REST gateway over a call-center directory stored in an
//! existing PostgreSQL schema: departments, operators and call records.
//!
//! The gateway owns no data. Every entity is created and mutated by
//! upstream processes (CRM sync, transcription pipeline); this service
//! only translates bounded, optional filter parameters into
//! deterministic, paginated result sets over a shared connection pool.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── DirectoryService (service/)
//!     │
//!     ├── PgStore (persistence/)
//!     │
//!     └── PostgreSQL (external schema, read-only)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
