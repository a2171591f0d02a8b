#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PermissionQueryErrorKind {
    /// The caller did not supply a usable package name.
    InvalidArgument,
    /// The package registry could not produce the package's permissions.
    LookupFailed,
}
