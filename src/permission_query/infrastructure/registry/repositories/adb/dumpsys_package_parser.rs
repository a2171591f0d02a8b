//! Reads the output of `dumpsys package <name>`.
//!
//! The package section starts with a `Package [<name>] (<hash>):` header and
//! runs until a line indented no deeper than that header. Inside it, the
//! `requested permissions:` block lists one permission per deeper-indented
//! line. Newer platform releases append attributes such as
//! `: restricted=true`, which are dropped.

use lazy_static::lazy_static;
use regex::Regex;

use crate::permission_query::infrastructure::registry::repositories::package_registry_repository::InstalledPackageRecord;

const REQUESTED_PERMISSIONS_HEADER: &str = "requested permissions:";

lazy_static! {
    static ref PACKAGE_HEADER_REGEX: Regex =
        Regex::new(r"^(\s*)Package \[([^\]]+)\]").expect("valid regex");
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn permission_token(line: &str) -> Option<String> {
    let token = line.trim().split(':').next().unwrap_or_default().trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Returns `None` when the output holds no section for `package_name`.
pub fn parse_dumpsys_package(output: &str, package_name: &str) -> Option<InstalledPackageRecord> {
    let mut lines = output.lines();

    let header_indent = lines.by_ref().find_map(|line| {
        PACKAGE_HEADER_REGEX
            .captures(line)
            .filter(|captures| &captures[2] == package_name)
            .map(|captures| captures[1].len())
    })?;

    let mut requested_permissions: Option<Vec<String>> = None;
    let mut block_indent: Option<usize> = None;

    for line in lines {
        if line.trim().is_empty() {
            block_indent = None;
            continue;
        }

        let indent = indentation(line);
        if indent <= header_indent {
            break;
        }

        if let Some(block) = block_indent {
            if indent > block {
                if let Some(permission) = permission_token(line) {
                    requested_permissions
                        .get_or_insert_with(Vec::new)
                        .push(permission);
                }
                continue;
            }
            block_indent = None;
        }

        if line.trim() == REQUESTED_PERMISSIONS_HEADER {
            block_indent = Some(indent);
            requested_permissions.get_or_insert_with(Vec::new);
        }
    }

    Some(InstalledPackageRecord {
        package_name: package_name.to_string(),
        requested_permissions,
    })
}
