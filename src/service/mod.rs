//! Service layer: the query service over the directory entities.

pub mod directory;

pub use directory::DirectoryService;
