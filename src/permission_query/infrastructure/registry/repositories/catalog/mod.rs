pub mod json_catalog_package_registry_repository_impl;
