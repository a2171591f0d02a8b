use std::sync::Arc;

use async_trait::async_trait;

use crate::permission_query::{
    domain::{
        model::{
            entities::requested_permission_list::RequestedPermissionList,
            enums::permission_query_domain_error::PermissionQueryDomainError,
            queries::get_app_permissions_query::GetAppPermissionsQuery,
        },
        services::permission_query_service::PermissionQueryService,
    },
    infrastructure::registry::repositories::package_registry_repository::PackageRegistryRepository,
};

pub struct PermissionQueryServiceImpl {
    package_registry_repository: Arc<dyn PackageRegistryRepository>,
}

impl PermissionQueryServiceImpl {
    pub fn new(package_registry_repository: Arc<dyn PackageRegistryRepository>) -> Self {
        Self {
            package_registry_repository,
        }
    }

    /// Anything the registry raises is a lookup failure for the caller.
    fn into_lookup_failure(error: PermissionQueryDomainError) -> PermissionQueryDomainError {
        match error {
            PermissionQueryDomainError::InvalidPackageName => {
                PermissionQueryDomainError::RegistryFailure(Some(error.to_string()))
            }
            other => other,
        }
    }
}

#[async_trait]
impl PermissionQueryService for PermissionQueryServiceImpl {
    async fn handle_get_app_permissions(
        &self,
        query: GetAppPermissionsQuery,
    ) -> Result<RequestedPermissionList, PermissionQueryDomainError> {
        let package_name = query.package_name();

        let record = self
            .package_registry_repository
            .find_installed_package(package_name)
            .await
            .map_err(Self::into_lookup_failure)
            .inspect_err(|error| {
                tracing::info!(
                    package_name = package_name.value(),
                    error = %error,
                    "package permission lookup failed"
                );
            })?;

        let permissions =
            RequestedPermissionList::from_registry_field(record.requested_permissions);
        tracing::debug!(
            package_name = %record.package_name,
            permission_count = permissions.len(),
            "package permissions resolved"
        );

        Ok(permissions)
    }
}
