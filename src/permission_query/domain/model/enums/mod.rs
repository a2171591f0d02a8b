pub mod permission_query_domain_error;
pub mod permission_query_error_kind;
