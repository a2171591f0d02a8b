use thiserror::Error;

use crate::permission_query::domain::model::enums::permission_query_error_kind::PermissionQueryErrorKind;

pub const INVALID_PACKAGE_CODE: &str = "INVALID_PACKAGE";
pub const PERMISSION_ERROR_CODE: &str = "PERMISSION_ERROR";

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PermissionQueryDomainError {
    #[error("Package name is required")]
    InvalidPackageName,

    #[error("{0}")]
    PackageNotFound(String),

    #[error("{}", .0.as_deref().unwrap_or("package registry lookup failed"))]
    RegistryFailure(Option<String>),
}

impl PermissionQueryDomainError {
    pub fn kind(&self) -> PermissionQueryErrorKind {
        match self {
            PermissionQueryDomainError::InvalidPackageName => {
                PermissionQueryErrorKind::InvalidArgument
            }
            PermissionQueryDomainError::PackageNotFound(_)
            | PermissionQueryDomainError::RegistryFailure(_) => {
                PermissionQueryErrorKind::LookupFailed
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind() {
            PermissionQueryErrorKind::InvalidArgument => INVALID_PACKAGE_CODE,
            PermissionQueryErrorKind::LookupFailed => PERMISSION_ERROR_CODE,
        }
    }

    /// Message as reported to callers. A registry failure without text stays `None`.
    pub fn message(&self) -> Option<String> {
        match self {
            PermissionQueryDomainError::RegistryFailure(message) => message.clone(),
            other => Some(other.to_string()),
        }
    }
}
