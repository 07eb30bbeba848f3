//! Service layer for student records.
//! - Separates business rules from data access.
//! - Reuses validation and the entity definition in the `models` crate.
//! - Exposes one repository seam with SeaORM and in-memory implementations.

pub mod errors;
pub mod student;
#[cfg(test)]
pub mod test_support;

pub use student::{
    domain::{Student, StudentChanges},
    repository::StudentRepository,
    service::StudentService,
};
