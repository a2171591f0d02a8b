pub mod adb;
pub mod catalog;
pub mod package_registry_repository;
