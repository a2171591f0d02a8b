use std::{process::Stdio, time::Duration};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::{process::Command, time::timeout};

use crate::permission_query::{
    domain::model::{
        enums::permission_query_domain_error::PermissionQueryDomainError,
        value_objects::package_name::PackageName,
    },
    infrastructure::registry::repositories::{
        adb::dumpsys_package_parser::parse_dumpsys_package,
        package_registry_repository::{InstalledPackageRecord, PackageRegistryRepository},
    },
};

lazy_static! {
    // Package names are forwarded to the device shell, so only names that an
    // installed package could carry are sent.
    static ref ANDROID_PACKAGE_NAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*$").expect("valid regex");
}

pub struct AdbDumpsysPackageRegistryRepositoryImpl {
    adb_path: String,
    serial: Option<String>,
    timeout: Duration,
}

impl AdbDumpsysPackageRegistryRepositoryImpl {
    pub fn new(adb_path: String, serial: Option<String>, timeout: Duration) -> Self {
        Self {
            adb_path,
            serial,
            timeout,
        }
    }

    fn build_command(&self, package_name: &PackageName) -> Command {
        let mut command = Command::new(&self.adb_path);
        if let Some(serial) = &self.serial {
            command.arg("-s").arg(serial);
        }
        command
            .args(["shell", "dumpsys", "package"])
            .arg(package_name.value())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    async fn run_dumpsys(
        &self,
        package_name: &PackageName,
    ) -> Result<String, PermissionQueryDomainError> {
        tracing::debug!(
            adb_path = %self.adb_path,
            serial = ?self.serial,
            package_name = package_name.value(),
            "running dumpsys package"
        );

        let mut command = self.build_command(package_name);
        let output = match timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|e| {
                PermissionQueryDomainError::RegistryFailure(Some(format!(
                    "failed to run {}: {e}",
                    self.adb_path
                )))
            })?,
            Err(_) => {
                return Err(PermissionQueryDomainError::RegistryFailure(Some(format!(
                    "dumpsys package timed out after {}ms",
                    self.timeout.as_millis()
                ))));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(exit_code = ?output.status.code(), "dumpsys package failed");
            return Err(PermissionQueryDomainError::RegistryFailure(
                (!stderr.is_empty()).then_some(stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl PackageRegistryRepository for AdbDumpsysPackageRegistryRepositoryImpl {
    async fn find_installed_package(
        &self,
        package_name: &PackageName,
    ) -> Result<InstalledPackageRecord, PermissionQueryDomainError> {
        // The platform reports a missing package by its name alone.
        let not_found =
            || PermissionQueryDomainError::PackageNotFound(package_name.value().to_string());

        if !ANDROID_PACKAGE_NAME_REGEX.is_match(package_name.value()) {
            return Err(not_found());
        }

        let output = self.run_dumpsys(package_name).await?;
        parse_dumpsys_package(&output, package_name.value()).ok_or_else(not_found)
    }
}
