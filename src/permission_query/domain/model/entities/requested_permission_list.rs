/// Permissions an installed package requests, in registry order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RequestedPermissionList(Vec<String>);

impl RequestedPermissionList {
    pub fn new(permissions: Vec<String>) -> Self {
        Self(permissions)
    }

    /// A registry record without a permission field is reported as an empty list.
    pub fn from_registry_field(permissions: Option<Vec<String>>) -> Self {
        Self(permissions.unwrap_or_default())
    }

    pub fn permissions(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    pub fn same_permissions_as<S: AsRef<str>>(&self, expected: &[S]) -> bool {
        let mut actual = self.0.iter().map(String::as_str).collect::<Vec<_>>();
        let mut expected = expected.iter().map(AsRef::as_ref).collect::<Vec<_>>();
        actual.sort_unstable();
        expected.sort_unstable();
        actual == expected
    }
}
