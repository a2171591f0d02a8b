use async_trait::async_trait;

use crate::permission_query::domain::model::{
    entities::requested_permission_list::RequestedPermissionList,
    enums::permission_query_domain_error::PermissionQueryDomainError,
    queries::get_app_permissions_query::GetAppPermissionsQuery,
};

#[async_trait]
pub trait PermissionQueryService: Send + Sync {
    async fn handle_get_app_permissions(
        &self,
        query: GetAppPermissionsQuery,
    ) -> Result<RequestedPermissionList, PermissionQueryDomainError>;
}
