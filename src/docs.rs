use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::video::handler::generate_video,
        crate::modules::video::handler::get_status,
    ),
    components(
        schemas(
            crate::modules::video::dto::GenerateVideoRequest,
            crate::modules::video::dto::GenerateVideoResponse,
            crate::modules::video::dto::JobStatusResponse,
            crate::modules::video::model::JobRecord,
            crate::common::response::ErrorBody,
        )
    ),
    tags(
        (name = "Video", description = "Video generation jobs")
    )
)]
pub struct ApiDoc;
