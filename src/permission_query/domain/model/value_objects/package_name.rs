use crate::permission_query::domain::model::enums::permission_query_domain_error::PermissionQueryDomainError;

/// Opaque identifier of an installed application. Only emptiness is checked
/// here; everything else is up to the package registry.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(value: String) -> Result<Self, PermissionQueryDomainError> {
        if value.is_empty() {
            return Err(PermissionQueryDomainError::InvalidPackageName);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
