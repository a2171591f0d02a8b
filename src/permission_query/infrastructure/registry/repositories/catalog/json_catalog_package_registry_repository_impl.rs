use std::{collections::HashMap, path::PathBuf};

use async_trait::async_trait;

use crate::permission_query::{
    domain::model::{
        enums::permission_query_domain_error::PermissionQueryDomainError,
        value_objects::package_name::PackageName,
    },
    infrastructure::registry::repositories::package_registry_repository::{
        InstalledPackageRecord, PackageRegistryRepository,
    },
};

/// Registry backed by a JSON object of `package name -> permissions | null`.
/// The file is read on every lookup.
pub struct JsonCatalogPackageRegistryRepositoryImpl {
    catalog_path: PathBuf,
}

impl JsonCatalogPackageRegistryRepositoryImpl {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self { catalog_path }
    }

    async fn load_catalog(
        &self,
    ) -> Result<HashMap<String, Option<Vec<String>>>, PermissionQueryDomainError> {
        let contents = tokio::fs::read_to_string(&self.catalog_path)
            .await
            .map_err(|e| {
                PermissionQueryDomainError::RegistryFailure(Some(format!(
                    "failed to read package catalog {}: {e}",
                    self.catalog_path.display()
                )))
            })?;

        serde_json::from_str(&contents).map_err(|e| {
            PermissionQueryDomainError::RegistryFailure(Some(format!(
                "invalid package catalog {}: {e}",
                self.catalog_path.display()
            )))
        })
    }
}

#[async_trait]
impl PackageRegistryRepository for JsonCatalogPackageRegistryRepositoryImpl {
    async fn find_installed_package(
        &self,
        package_name: &PackageName,
    ) -> Result<InstalledPackageRecord, PermissionQueryDomainError> {
        let mut catalog = self.load_catalog().await?;

        match catalog.remove(package_name.value()) {
            Some(requested_permissions) => Ok(InstalledPackageRecord {
                package_name: package_name.value().to_string(),
                requested_permissions,
            }),
            None => Err(PermissionQueryDomainError::PackageNotFound(
                package_name.value().to_string(),
            )),
        }
    }
}
