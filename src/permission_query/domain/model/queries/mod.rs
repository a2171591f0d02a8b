pub mod get_app_permissions_query;
