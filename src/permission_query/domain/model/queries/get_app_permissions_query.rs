use crate::permission_query::domain::model::{
    enums::permission_query_domain_error::PermissionQueryDomainError,
    value_objects::package_name::PackageName,
};

#[derive(Clone, Debug)]
pub struct GetAppPermissionsQuery {
    package_name: PackageName,
}

impl GetAppPermissionsQuery {
    pub fn new(package_name: Option<String>) -> Result<Self, PermissionQueryDomainError> {
        let package_name = package_name.ok_or(PermissionQueryDomainError::InvalidPackageName)?;
        Ok(Self {
            package_name: PackageName::new(package_name)?,
        })
    }

    pub fn package_name(&self) -> &PackageName {
        &self.package_name
    }
}
