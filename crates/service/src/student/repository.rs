use async_trait::async_trait;

use super::domain::{Student, StudentChanges};
use crate::errors::ServiceError;

/// Persistence seam for the student collection.
///
/// `insert` must reject an existing `roll_no` with `ServiceError::DuplicateKey`
/// atomically and enforce the required text fields the way
/// `models::student::create` does; `update` and `delete` report a missing key
/// through their return value rather than an error.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, student: &Student) -> Result<Student, ServiceError>;
    async fn find(&self, roll_no: &str) -> Result<Option<Student>, ServiceError>;
    async fn update(&self, roll_no: &str, changes: &StudentChanges) -> Result<Option<Student>, ServiceError>;
    async fn delete(&self, roll_no: &str) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use models::student::validate_required;
    use std::collections::{hash_map::Entry, HashMap};
    use std::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryStudentRepository {
        students: RwLock<HashMap<String, Student>>, // key: roll_no
    }

    impl InMemoryStudentRepository {
        pub fn len(&self) -> usize {
            self.students.read().map(|m| m.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    fn poisoned() -> ServiceError {
        ServiceError::Db("student map lock poisoned".into())
    }

    #[async_trait]
    impl StudentRepository for InMemoryStudentRepository {
        async fn insert(&self, student: &Student) -> Result<Student, ServiceError> {
            validate_required("rollNo", &student.roll_no)?;
            validate_required("name", &student.name)?;
            validate_required("department", &student.department)?;
            let mut students = self.students.write().map_err(|_| poisoned())?;
            match students.entry(student.roll_no.clone()) {
                Entry::Occupied(_) => Err(ServiceError::duplicate(&student.roll_no)),
                Entry::Vacant(slot) => Ok(slot.insert(student.clone()).clone()),
            }
        }

        async fn find(&self, roll_no: &str) -> Result<Option<Student>, ServiceError> {
            let students = self.students.read().map_err(|_| poisoned())?;
            Ok(students.get(roll_no).cloned())
        }

        async fn update(&self, roll_no: &str, changes: &StudentChanges) -> Result<Option<Student>, ServiceError> {
            let mut students = self.students.write().map_err(|_| poisoned())?;
            Ok(students.get_mut(roll_no).map(|s| {
                *s = s.with_changes(changes);
                s.clone()
            }))
        }

        async fn delete(&self, roll_no: &str) -> Result<bool, ServiceError> {
            let mut students = self.students.write().map_err(|_| poisoned())?;
            Ok(students.remove(roll_no).is_some())
        }
    }
}
