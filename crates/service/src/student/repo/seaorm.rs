use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::student::domain::{Student, StudentChanges};
use crate::student::repository::StudentRepository;

/// SeaORM-backed repository over the `students` table.
#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn insert(&self, s: &Student) -> Result<Student, ServiceError> {
        let created = models::student::create(&self.db, &s.roll_no, &s.name, &s.department, s.semester, s.age).await?;
        Ok(created.into())
    }

    async fn find(&self, roll_no: &str) -> Result<Option<Student>, ServiceError> {
        let found = models::student::find_by_roll_no(&self.db, roll_no).await?;
        Ok(found.map(Student::from))
    }

    async fn update(&self, roll_no: &str, c: &StudentChanges) -> Result<Option<Student>, ServiceError> {
        let updated = models::student::update_by_roll_no(
            &self.db,
            roll_no,
            c.name.as_deref(),
            c.department.as_deref(),
            c.semester,
            c.age,
        )
        .await?;
        Ok(updated.map(Student::from))
    }

    async fn delete(&self, roll_no: &str) -> Result<bool, ServiceError> {
        Ok(models::student::delete_by_roll_no(&self.db, roll_no).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn student(roll_no: &str) -> Student {
        Student { roll_no: roll_no.into(), name: "Meera".into(), department: "EE".into(), semester: 2, age: 19 }
    }

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);

        let created = repo.insert(&student("S-100")).await?;
        assert_eq!(created, student("S-100"));
        assert_eq!(repo.find("S-100").await?, Some(student("S-100")));

        let changes = StudentChanges { name: Some("Meera R.".into()), semester: Some(3), ..Default::default() };
        let updated = repo.update("S-100", &changes).await?.expect("exists");
        assert_eq!(updated.roll_no, "S-100");
        assert_eq!(updated.name, "Meera R.");
        assert_eq!(updated.semester, 3);
        assert_eq!(updated.department, "EE");

        assert!(repo.delete("S-100").await?);
        assert_eq!(repo.find("S-100").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_rejects_duplicate_roll_no() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        repo.insert(&student("S-200")).await?;

        let mut other = student("S-200");
        other.name = "Someone Else".into();
        let err = repo.insert(&other).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateKey { .. }), "got {err:?}");

        assert_eq!(repo.find("S-200").await?.map(|s| s.name), Some("Meera".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_missing_keys() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        let changes = StudentChanges { name: Some("X".into()), age: Some(1), ..Default::default() };
        assert_eq!(repo.update("absent", &changes).await?, None);
        assert!(!repo.delete("absent").await?);
        Ok(())
    }
}
