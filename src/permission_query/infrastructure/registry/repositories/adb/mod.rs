pub mod adb_dumpsys_package_registry_repository_impl;
pub mod dumpsys_package_parser;
