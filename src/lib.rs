pub mod config;
pub mod permission_query;
