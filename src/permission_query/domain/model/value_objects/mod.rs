pub mod package_name;
