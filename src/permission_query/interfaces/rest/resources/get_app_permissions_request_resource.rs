use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAppPermissionsRequestResource {
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(length(min = 1))]
    pub package_name: Option<String>,
}

/// A non-string `packageName` counts as missing, as on the method-call endpoint.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}
