pub mod permission_query_rest_controller;
