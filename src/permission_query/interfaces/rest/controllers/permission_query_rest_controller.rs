use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    config::app_config::PackageRegistryBackend,
    permission_query::{
        domain::{
            model::{
                entities::requested_permission_list::RequestedPermissionList,
                enums::permission_query_domain_error::PermissionQueryDomainError,
                queries::get_app_permissions_query::GetAppPermissionsQuery,
            },
            services::permission_query_service::PermissionQueryService,
        },
        interfaces::rest::resources::{
            get_app_permissions_request_resource::GetAppPermissionsRequestResource,
            health_response_resource::HealthResponseResource,
            method_call_resource::{
                MethodCallRequestResource, MethodCallResponseResource, PermissionMethodCall,
                UnsupportedMethodCall,
            },
            permission_query_error_response_resource::PermissionQueryErrorResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct PermissionQueryRestControllerState {
    pub query_service: Arc<dyn PermissionQueryService>,
    pub registry_backend: PackageRegistryBackend,
}

pub fn router(state: PermissionQueryRestControllerState) -> Router {
    Router::new()
        .route("/permissions/app-permissions", post(get_app_permissions))
        .route("/permissions/method-calls", post(handle_method_call))
        .route("/health", get(health))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/permissions/app-permissions",
    tag = "permissions",
    request_body = GetAppPermissionsRequestResource,
    responses(
        (status = 200, description = "Permissions requested by the package", body = Vec<String>),
        (status = 400, description = "Package name missing", body = PermissionQueryErrorResponseResource),
        (status = 404, description = "Package not installed", body = PermissionQueryErrorResponseResource),
        (status = 502, description = "Package registry failure", body = PermissionQueryErrorResponseResource)
    )
)]
pub async fn get_app_permissions(
    State(state): State<PermissionQueryRestControllerState>,
    Json(request): Json<GetAppPermissionsRequestResource>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<PermissionQueryErrorResponseResource>)> {
    if request.validate().is_err() {
        return Err(map_domain_error(PermissionQueryDomainError::InvalidPackageName));
    }

    let permissions = run_get_app_permissions(&state, request.package_name)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(permissions.into_inner()))
}

#[utoipa::path(
    post,
    path = "/permissions/method-calls",
    tag = "permissions",
    request_body = MethodCallRequestResource,
    responses(
        (status = 200, description = "Method call succeeded", body = MethodCallResponseResource),
        (status = 400, description = "Package name missing", body = MethodCallResponseResource),
        (status = 404, description = "Package not installed", body = MethodCallResponseResource),
        (status = 501, description = "Method not implemented", body = MethodCallResponseResource),
        (status = 502, description = "Package registry failure", body = MethodCallResponseResource)
    )
)]
pub async fn handle_method_call(
    State(state): State<PermissionQueryRestControllerState>,
    Json(request): Json<MethodCallRequestResource>,
) -> (StatusCode, Json<MethodCallResponseResource>) {
    let call = match PermissionMethodCall::try_from(request) {
        Ok(call) => call,
        Err(UnsupportedMethodCall(method)) => {
            tracing::debug!(method = %method, "method call not implemented");
            return (
                StatusCode::NOT_IMPLEMENTED,
                Json(MethodCallResponseResource::NotImplemented { method }),
            );
        }
    };

    match call {
        PermissionMethodCall::GetAppPermissions { package_name } => {
            match run_get_app_permissions(&state, package_name).await {
                Ok(permissions) => (
                    StatusCode::OK,
                    Json(MethodCallResponseResource::Success {
                        result: permissions.into_inner(),
                    }),
                ),
                Err(error) => (
                    status_for(&error),
                    Json(MethodCallResponseResource::Error {
                        code: error.code().to_string(),
                        message: error.message(),
                        details: None,
                    }),
                ),
            }
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "permissions",
    responses(
        (status = 200, description = "Service is up", body = HealthResponseResource)
    )
)]
pub async fn health(
    State(state): State<PermissionQueryRestControllerState>,
) -> Json<HealthResponseResource> {
    Json(HealthResponseResource {
        status: "ok".to_string(),
        registry_backend: state.registry_backend.to_string(),
    })
}

async fn run_get_app_permissions(
    state: &PermissionQueryRestControllerState,
    package_name: Option<String>,
) -> Result<RequestedPermissionList, PermissionQueryDomainError> {
    let query = GetAppPermissionsQuery::new(package_name)?;
    state.query_service.handle_get_app_permissions(query).await
}

fn status_for(error: &PermissionQueryDomainError) -> StatusCode {
    match error {
        PermissionQueryDomainError::InvalidPackageName => StatusCode::BAD_REQUEST,
        PermissionQueryDomainError::PackageNotFound(_) => StatusCode::NOT_FOUND,
        PermissionQueryDomainError::RegistryFailure(_) => StatusCode::BAD_GATEWAY,
    }
}

fn map_domain_error(
    error: PermissionQueryDomainError,
) -> (StatusCode, Json<PermissionQueryErrorResponseResource>) {
    (
        status_for(&error),
        Json(PermissionQueryErrorResponseResource {
            code: error.code().to_string(),
            message: error.message(),
            details: None,
        }),
    )
}
