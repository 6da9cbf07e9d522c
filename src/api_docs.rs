use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::hello,
        api::health::health_check,
        api::users::list_users,
        api::users::get_user,
        api::users::create_user,
        api::users::update_user,
        api::users::delete_user,
        api::dolar::get_dolar,
    ),
    components(
        schemas(
            crate::domain::User,
            crate::services::DeleteAck,
            api::users::UserPayload,
        )
    ),
    tags(
        (name = "usuarios-api", description = "Users CRUD and dolar rate proxy")
    )
)]
pub struct ApiDoc;
