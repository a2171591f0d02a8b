pub mod requested_permission_list;
