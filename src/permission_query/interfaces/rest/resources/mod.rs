pub mod get_app_permissions_request_resource;
pub mod health_response_resource;
pub mod method_call_resource;
pub mod permission_query_error_response_resource;
