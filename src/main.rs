use app_permissions_api::{
    config::app_config::AppConfig,
    permission_query::{
        build_permission_query_router,
        interfaces::rest::resources::{
            get_app_permissions_request_resource::GetAppPermissionsRequestResource,
            health_response_resource::HealthResponseResource,
            method_call_resource::{MethodCallRequestResource, MethodCallResponseResource},
            permission_query_error_response_resource::PermissionQueryErrorResponseResource,
        },
    },
};
use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        app_permissions_api::permission_query::interfaces::rest::controllers::permission_query_rest_controller::get_app_permissions,
        app_permissions_api::permission_query::interfaces::rest::controllers::permission_query_rest_controller::handle_method_call,
        app_permissions_api::permission_query::interfaces::rest::controllers::permission_query_rest_controller::health
    ),
    components(
        schemas(
            GetAppPermissionsRequestResource,
            PermissionQueryErrorResponseResource,
            MethodCallRequestResource,
            MethodCallResponseResource,
            HealthResponseResource
        )
    ),
    tags(
        (name = "permissions", description = "Requested permissions of installed applications")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let permission_query_router =
        build_permission_query_router(&config).expect("failed to build permission query router");

    let app = Router::new()
        .merge(permission_query_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("server listening on http://localhost:{}", config.port);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
