use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDoc {
    #[schema(example = "R1")]
    pub roll_no: String,
    #[schema(example = "Asha")]
    pub name: String,
    #[schema(example = "CS")]
    pub department: String,
    #[schema(example = 3)]
    pub semester: i32,
    #[schema(example = 20)]
    pub age: i32,
}

/// Any subset of the mutable fields; omitted fields keep their stored value.
#[derive(ToSchema)]
pub struct StudentUpdateDoc {
    pub name: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub age: Option<i32>,
}

#[derive(ToSchema)]
pub struct StudentEnvelopeDoc {
    pub message: String,
    pub student: StudentDoc,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::create,
        crate::routes::students::get,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            StudentUpdateDoc,
            StudentEnvelopeDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;
