use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PackageRegistryBackend {
    Adb,
    Catalog,
}

impl PackageRegistryBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageRegistryBackend::Adb => "adb",
            PackageRegistryBackend::Catalog => "catalog",
        }
    }
}

impl FromStr for PackageRegistryBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "adb" => Ok(PackageRegistryBackend::Adb),
            "catalog" => Ok(PackageRegistryBackend::Catalog),
            other => Err(format!("unknown package registry backend: {other}")),
        }
    }
}

impl fmt::Display for PackageRegistryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub package_registry_backend: String,
    pub adb_path: String,
    pub adb_serial: Option<String>,
    pub adb_timeout_ms: u64,
    pub package_catalog_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            package_registry_backend: std::env::var("PACKAGE_REGISTRY_BACKEND")
                .unwrap_or_else(|_| "adb".to_string()),
            adb_path: std::env::var("ADB_PATH").unwrap_or_else(|_| "adb".to_string()),
            adb_serial: std::env::var("ADB_SERIAL")
                .ok()
                .filter(|serial| !serial.trim().is_empty()),
            adb_timeout_ms: std::env::var("ADB_TIMEOUT_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10_000),
            package_catalog_path: std::env::var("PACKAGE_CATALOG_PATH")
                .unwrap_or_else(|_| "package_catalog.json".to_string()),
        }
    }

    pub fn registry_backend(&self) -> Result<PackageRegistryBackend, String> {
        self.package_registry_backend.parse()
    }
}
