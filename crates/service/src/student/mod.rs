//! Student records: domain types, repository seam, and the record service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
