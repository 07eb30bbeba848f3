use sea_orm::{
    entity::prelude::*, sea_query::Expr, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub roll_no: String,
    pub name: String,
    pub department: String,
    pub semester: i32,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Reject blank values for a required text column.
pub fn validate_required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn db_err(e: DbErr) -> errors::ModelError {
    errors::ModelError::Db(e.to_string())
}

pub async fn find_by_roll_no(db: &DatabaseConnection, roll_no: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::RollNo.eq(roll_no))
        .one(db)
        .await
        .map_err(db_err)
}

/// Insert a new row. A violation of the unique index on `roll_no` surfaces as
/// `ModelError::Duplicate`.
pub async fn create(
    db: &DatabaseConnection,
    roll_no: &str,
    name: &str,
    department: &str,
    semester: i32,
    age: i32,
) -> Result<Model, errors::ModelError> {
    validate_required("rollNo", roll_no)?;
    validate_required("name", name)?;
    validate_required("department", department)?;

    let am = ActiveModel {
        roll_no: Set(roll_no.to_string()),
        name: Set(name.to_string()),
        department: Set(department.to_string()),
        semester: Set(semester),
        age: Set(age),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => errors::ModelError::Duplicate(roll_no.to_string()),
        _ => db_err(e),
    })
}

/// Overwrite whichever mutable columns are supplied on the row keyed by
/// `roll_no`; columns passed as `None` keep their stored value.
/// Returns `None` when no such row exists.
pub async fn update_by_roll_no(
    db: &DatabaseConnection,
    roll_no: &str,
    name: Option<&str>,
    department: Option<&str>,
    semester: Option<i32>,
    age: Option<i32>,
) -> Result<Option<Model>, errors::ModelError> {
    let mut update = Entity::update_many().filter(Column::RollNo.eq(roll_no));
    let mut touched = false;
    if let Some(name) = name {
        update = update.col_expr(Column::Name, Expr::value(name.to_string()));
        touched = true;
    }
    if let Some(department) = department {
        update = update.col_expr(Column::Department, Expr::value(department.to_string()));
        touched = true;
    }
    if let Some(semester) = semester {
        update = update.col_expr(Column::Semester, Expr::value(semester));
        touched = true;
    }
    if let Some(age) = age {
        update = update.col_expr(Column::Age, Expr::value(age));
        touched = true;
    }

    if touched {
        let res = update.exec(db).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
    }
    find_by_roll_no(db, roll_no).await
}

/// Delete the row keyed by `roll_no`; returns whether a row was removed.
pub async fn delete_by_roll_no(db: &DatabaseConnection, roll_no: &str) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::RollNo.eq(roll_no))
        .exec(db)
        .await
        .map_err(db_err)?;
    Ok(res.rows_affected > 0)
}
