use std::sync::Arc;

use common::metrics::record_operation;
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::student::domain::{Student, StudentChanges};
use crate::student::repository::StudentRepository;

/// Record service over a single student collection.
///
/// Each operation is a single step against the repository; failures are
/// returned to the caller as-is and never retried.
pub struct StudentService<R: StudentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StudentRepository + ?Sized> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a record. Fails with `DuplicateKey` when `roll_no` is taken and
    /// with `Validation` when the repository rejects a blank required field.
    ///
    /// # Examples
    /// ```
    /// use service::student::{domain::Student, repository::mock::InMemoryStudentRepository, service::StudentService};
    /// use std::sync::Arc;
    /// let svc = StudentService::new(Arc::new(InMemoryStudentRepository::default()));
    /// let s = Student { roll_no: "R1".into(), name: "Asha".into(), department: "CS".into(), semester: 3, age: 20 };
    /// let created = tokio_test::block_on(svc.create(s.clone())).unwrap();
    /// assert_eq!(created, s);
    /// assert!(tokio_test::block_on(svc.create(s)).is_err());
    /// ```
    #[instrument(skip(self, student), fields(roll_no = %student.roll_no))]
    pub async fn create(&self, student: Student) -> Result<Student, ServiceError> {
        let res = self.repo.insert(&student).await;
        observe("create", &res);
        let created = res?;
        info!(roll_no = %created.roll_no, "student_created");
        Ok(created)
    }

    /// Fetch a record by roll number. Fails with `NotFound` when absent.
    #[instrument(skip(self))]
    pub async fn get(&self, roll_no: &str) -> Result<Student, ServiceError> {
        let res = self
            .repo
            .find(roll_no)
            .await
            .and_then(|found| found.ok_or_else(|| ServiceError::not_found(roll_no)));
        observe("read", &res);
        res
    }

    /// Overwrite the supplied fields; `roll_no` never changes.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, roll_no: &str, changes: StudentChanges) -> Result<Student, ServiceError> {
        let res = self
            .repo
            .update(roll_no, &changes)
            .await
            .and_then(|updated| updated.ok_or_else(|| ServiceError::not_found(roll_no)));
        observe("update", &res);
        let updated = res?;
        info!(roll_no = %updated.roll_no, semester = updated.semester, "student_updated");
        Ok(updated)
    }

    /// Remove a record. Fails with `NotFound` when absent.
    #[instrument(skip(self))]
    pub async fn delete(&self, roll_no: &str) -> Result<(), ServiceError> {
        let res = match self.repo.delete(roll_no).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::not_found(roll_no)),
            Err(e) => Err(e),
        };
        observe("delete", &res);
        res?;
        info!(%roll_no, "student_deleted");
        Ok(())
    }
}

fn observe<T>(operation: &'static str, res: &Result<T, ServiceError>) {
    match res {
        Ok(_) => record_operation(operation, "ok"),
        Err(e) => {
            record_operation(operation, e.kind());
            match e {
                ServiceError::Db(_) => warn!(operation, error = %e, "student_operation_failed"),
                _ => info!(operation, outcome = e.kind(), "student_operation_rejected"),
            }
        }
    }
}
