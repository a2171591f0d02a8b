pub mod permission_query_service;
