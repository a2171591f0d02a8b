use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::Router;

use crate::{
    config::app_config::{AppConfig, PackageRegistryBackend},
    permission_query::{
        application::query_services::permission_query_service_impl::PermissionQueryServiceImpl,
        infrastructure::registry::repositories::{
            adb::adb_dumpsys_package_registry_repository_impl::AdbDumpsysPackageRegistryRepositoryImpl,
            catalog::json_catalog_package_registry_repository_impl::JsonCatalogPackageRegistryRepositoryImpl,
            package_registry_repository::PackageRegistryRepository,
        },
        interfaces::rest::controllers::permission_query_rest_controller::{
            PermissionQueryRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_permission_query_router(config: &AppConfig) -> Result<Router, String> {
    let registry_backend = config.registry_backend()?;

    let package_registry_repository: Arc<dyn PackageRegistryRepository> = match registry_backend
    {
        PackageRegistryBackend::Adb => Arc::new(AdbDumpsysPackageRegistryRepositoryImpl::new(
            config.adb_path.clone(),
            config.adb_serial.clone(),
            Duration::from_millis(config.adb_timeout_ms),
        )),
        PackageRegistryBackend::Catalog => Arc::new(JsonCatalogPackageRegistryRepositoryImpl::new(
            PathBuf::from(&config.package_catalog_path),
        )),
    };

    let query_service = Arc::new(PermissionQueryServiceImpl::new(package_registry_repository));

    tracing::info!(registry_backend = %registry_backend, "permission query router built");

    Ok(router(PermissionQueryRestControllerState {
        query_service,
        registry_backend,
    }))
}
