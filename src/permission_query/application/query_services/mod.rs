pub mod permission_query_service_impl;
