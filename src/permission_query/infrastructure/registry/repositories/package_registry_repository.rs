use async_trait::async_trait;

use crate::permission_query::domain::model::{
    enums::permission_query_domain_error::PermissionQueryDomainError,
    value_objects::package_name::PackageName,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstalledPackageRecord {
    pub package_name: String,
    /// `None` when the registry has no permission field for the package.
    pub requested_permissions: Option<Vec<String>>,
}

#[async_trait]
pub trait PackageRegistryRepository: Send + Sync {
    /// Fails with `PackageNotFound` when the package is not installed and
    /// `RegistryFailure` for any other registry error.
    async fn find_installed_package(
        &self,
        package_name: &PackageName,
    ) -> Result<InstalledPackageRecord, PermissionQueryDomainError>;
}
