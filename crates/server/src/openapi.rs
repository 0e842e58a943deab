use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ItemTypeDataDoc { pub name: String, pub model: String, pub manufacturer: String }

#[derive(ToSchema)]
pub struct ResolutionDataDoc { pub name: String, pub description: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::repairs,
        crate::routes::faults::list,
        crate::routes::faults::get,
        crate::routes::items::list,
        crate::routes::items::get,
        crate::routes::item_types::list,
        crate::routes::item_types::get,
        crate::routes::item_types::create,
        crate::routes::item_types::replace,
        crate::routes::repairs::list,
        crate::routes::repairs::get,
        crate::routes::resolutions::list,
        crate::routes::resolutions::get,
        crate::routes::resolutions::create,
        crate::routes::resolutions::replace,
    ),
    components(
        schemas(
            HealthResponse,
            ItemTypeDataDoc,
            ResolutionDataDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customer"),
        (name = "fault"),
        (name = "item"),
        (name = "itemtype"),
        (name = "repair"),
        (name = "resolution")
    )
)]
pub struct ApiDoc;
