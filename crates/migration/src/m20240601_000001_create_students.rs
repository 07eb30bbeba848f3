//! Create `students` table.
//! One row per student record; `roll_no` is the caller-assigned natural key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(students_table()).await?;

        // Uniqueness of roll_no is enforced here, not by a lookup before insert
        manager
            .create_index(
                Index::create()
                    .name("idx_students_roll_no_unique")
                    .table(Students::Table)
                    .col(Students::RollNo)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Students::Table).to_owned()).await
    }
}

/// Text columns carry no length limit so every backend accepts the same values.
fn students_table() -> TableCreateStatement {
    Table::create()
        .table(Students::Table)
        .if_not_exists()
        .col(pk_auto(Students::Id))
        .col(string(Students::RollNo))
        .col(text(Students::Name))
        .col(text(Students::Department))
        .col(integer(Students::Semester))
        .col(integer(Students::Age))
        .to_owned()
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    RollNo,
    Name,
    Department,
    Semester,
    Age,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::sea_query::{PostgresQueryBuilder, SqliteQueryBuilder};

    #[test]
    fn text_columns_have_no_length_limit() {
        let pg = students_table().to_string(PostgresQueryBuilder);
        assert!(!pg.contains("varchar("), "{pg}");
        assert!(pg.contains("\"name\" text"), "{pg}");

        let lite = students_table().to_string(SqliteQueryBuilder);
        assert!(!lite.contains("varchar("), "{lite}");
    }
}
