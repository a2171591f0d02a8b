use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const GET_APP_PERMISSIONS_METHOD: &str = "getAppPermissions";
const PACKAGE_NAME_ARGUMENT: &str = "packageName";

/// Envelope kept for callers that still speak the method-channel shape.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MethodCallRequestResource {
    pub method: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub arguments: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodCallResponseResource {
    Success {
        result: Vec<String>,
    },
    Error {
        code: String,
        message: Option<String>,
        #[schema(value_type = Option<Object>)]
        details: Option<Value>,
    },
    NotImplemented {
        method: String,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PermissionMethodCall {
    GetAppPermissions { package_name: Option<String> },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnsupportedMethodCall(pub String);

impl TryFrom<MethodCallRequestResource> for PermissionMethodCall {
    type Error = UnsupportedMethodCall;

    fn try_from(request: MethodCallRequestResource) -> Result<Self, Self::Error> {
        match request.method.as_str() {
            GET_APP_PERMISSIONS_METHOD => {
                // A non-string argument counts as missing.
                let package_name = request
                    .arguments
                    .as_ref()
                    .and_then(|arguments| arguments.get(PACKAGE_NAME_ARGUMENT))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Ok(PermissionMethodCall::GetAppPermissions { package_name })
            }
            _ => Err(UnsupportedMethodCall(request.method)),
        }
    }
}
