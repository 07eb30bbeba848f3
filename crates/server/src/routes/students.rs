use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use service::{errors::ServiceError, Student, StudentChanges};
use tracing::info;

use crate::{errors::ApiError, routes::AppState};

pub const CREATED_MESSAGE: &str = "Student record created successfully";
pub const UPDATED_MESSAGE: &str = "Student record updated successfully";
pub const DELETED_MESSAGE: &str = "Student record deleted successfully";

/// Untyped request body. Every field is optional; absent and `null` are the
/// same. Text fields also accept numbers and integer fields also accept
/// numeric strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    #[serde(default, deserialize_with = "text_field")]
    pub roll_no: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "int_field")]
    pub semester: Option<i32>,
    #[serde(default, deserialize_with = "int_field")]
    pub age: Option<i32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntValue {
    Int(i64),
    Text(String),
}

fn text_field<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<TextValue>::deserialize(d)?.map(|v| match v {
        TextValue::Text(s) => s,
        TextValue::Number(n) => n.to_string(),
    }))
}

fn int_field<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    match Option::<IntValue>::deserialize(d)? {
        None => Ok(None),
        Some(IntValue::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("{n} is out of range for an integer field"))),
        Some(IntValue::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("cannot read \"{s}\" as an integer"))),
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::Validation(format!("{field} is required")))
}

impl StudentPayload {
    pub fn into_student(self) -> Result<Student, ServiceError> {
        Ok(Student {
            roll_no: required(self.roll_no, "rollNo")?,
            name: required(self.name, "name")?,
            department: required(self.department, "department")?,
            semester: required(self.semester, "semester")?,
            age: required(self.age, "age")?,
        })
    }

    /// A `rollNo` key in an update body is ignored.
    pub fn into_changes(self) -> StudentChanges {
        StudentChanges { name: self.name, department: self.department, semester: self.semester, age: self.age }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentEnvelope {
    pub message: String,
    pub student: Student,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post, path = "/api/students", tag = "students",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StudentEnvelopeDoc),
        (status = 400, description = "Duplicate roll number", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Missing fields or unexpected failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentEnvelope>), ApiError> {
    let Json(payload) = payload?;
    let student = state.students.create(payload.into_student()?).await?;
    info!(roll_no = %student.roll_no, "created student");
    Ok((StatusCode::CREATED, Json(StudentEnvelope { message: CREATED_MESSAGE.into(), student })))
}

#[utoipa::path(
    get, path = "/api/students/{roll_no}", tag = "students",
    params(("roll_no" = String, Path, description = "Roll number")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Unexpected failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(roll_no): Path<String>) -> Result<Json<Student>, ApiError> {
    Ok(Json(state.students.get(&roll_no).await?))
}

#[utoipa::path(
    put, path = "/api/students/{roll_no}", tag = "students",
    params(("roll_no" = String, Path, description = "Roll number")),
    request_body = crate::openapi::StudentUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentEnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Unexpected failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(roll_no): Path<String>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<Json<StudentEnvelope>, ApiError> {
    let Json(payload) = payload?;
    let student = state.students.update(&roll_no, payload.into_changes()).await?;
    info!(roll_no = %student.roll_no, "updated student");
    Ok(Json(StudentEnvelope { message: UPDATED_MESSAGE.into(), student }))
}

#[utoipa::path(
    delete, path = "/api/students/{roll_no}", tag = "students",
    params(("roll_no" = String, Path, description = "Roll number")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Unexpected failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(roll_no): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.students.delete(&roll_no).await?;
    info!(%roll_no, "deleted student");
    Ok(Json(MessageResponse { message: DELETED_MESSAGE.into() }))
}
