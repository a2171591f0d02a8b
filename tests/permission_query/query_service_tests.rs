use std::sync::Arc;

use app_permissions_api::permission_query::domain::{
    model::{
        enums::{
            permission_query_domain_error::PermissionQueryDomainError,
            permission_query_error_kind::PermissionQueryErrorKind,
        },
        queries::get_app_permissions_query::GetAppPermissionsQuery,
    },
    services::permission_query_service::PermissionQueryService,
};

use crate::support::{
    CAMERA_PERMISSION, EXAMPLE_PACKAGE, INTERNET_PERMISSION, MISSING_PACKAGE, NOT_FOUND_MESSAGE,
    QUIET_PACKAGE, create_query_harness, get_app_permissions_query,
};

#[tokio::test]
async fn get_app_permissions_returns_registry_permissions() {
    let harness = create_query_harness();
    harness.registry_repository.install_package(
        EXAMPLE_PACKAGE,
        Some(vec![CAMERA_PERMISSION, INTERNET_PERMISSION]),
    );

    let permissions = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query(EXAMPLE_PACKAGE))
        .await
        .expect("permissions expected");

    assert_eq!(
        permissions.permissions(),
        &[CAMERA_PERMISSION.to_string(), INTERNET_PERMISSION.to_string()]
    );
    assert!(permissions.same_permissions_as(&[INTERNET_PERMISSION, CAMERA_PERMISSION]));
    assert_eq!(harness.registry_repository.lookups(), vec![EXAMPLE_PACKAGE]);
}

#[tokio::test]
async fn get_app_permissions_returns_empty_list_for_package_without_permissions() {
    let harness = create_query_harness();
    harness
        .registry_repository
        .install_package(EXAMPLE_PACKAGE, Some(vec![]));

    let permissions = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query(EXAMPLE_PACKAGE))
        .await
        .expect("empty permission list expected");

    assert!(permissions.is_empty());
}

#[tokio::test]
async fn get_app_permissions_treats_absent_permission_field_as_empty() {
    let harness = create_query_harness();
    harness.registry_repository.install_package(QUIET_PACKAGE, None);

    let permissions = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query(QUIET_PACKAGE))
        .await
        .expect("empty permission list expected");

    assert!(permissions.is_empty());
}

#[tokio::test]
async fn get_app_permissions_fails_with_registry_message_for_unknown_package() {
    let harness = create_query_harness();

    let error = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query(MISSING_PACKAGE))
        .await
        .expect_err("lookup failure expected");

    assert_eq!(error.kind(), PermissionQueryErrorKind::LookupFailed);
    assert_eq!(error.code(), "PERMISSION_ERROR");
    assert_eq!(error.message(), Some(format!("{NOT_FOUND_MESSAGE}: {MISSING_PACKAGE}")));
}

#[tokio::test]
async fn get_app_permissions_passes_registry_failure_through_without_retry() {
    let harness = create_query_harness();
    harness
        .registry_repository
        .fail_with(PermissionQueryDomainError::RegistryFailure(None));

    let error = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query(EXAMPLE_PACKAGE))
        .await
        .expect_err("lookup failure expected");

    assert_eq!(error, PermissionQueryDomainError::RegistryFailure(None));
    assert_eq!(error.message(), None);
    assert_eq!(harness.registry_repository.lookups().len(), 1);
}

#[tokio::test]
async fn get_app_permissions_reports_invalid_name_from_registry_as_lookup_failure() {
    let harness = create_query_harness();
    harness
        .registry_repository
        .fail_with(PermissionQueryDomainError::InvalidPackageName);

    let error = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query(EXAMPLE_PACKAGE))
        .await
        .expect_err("lookup failure expected");

    assert_eq!(error.kind(), PermissionQueryErrorKind::LookupFailed);
}

#[tokio::test]
async fn empty_or_missing_package_name_is_rejected_before_lookup() {
    for package_name in [None, Some(String::new())] {
        let error = GetAppPermissionsQuery::new(package_name).expect_err("invalid query expected");

        assert_eq!(error, PermissionQueryDomainError::InvalidPackageName);
        assert_eq!(error.kind(), PermissionQueryErrorKind::InvalidArgument);
        assert_eq!(error.message().as_deref(), Some("Package name is required"));
    }
}

#[tokio::test]
async fn padded_package_name_reaches_registry_unchanged() {
    let harness = create_query_harness();
    harness
        .registry_repository
        .install_package(EXAMPLE_PACKAGE, Some(vec![CAMERA_PERMISSION]));
    let padded = format!("  {EXAMPLE_PACKAGE}  ");

    let error = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query(&padded))
        .await
        .expect_err("padded name is not an installed package");

    assert_eq!(error.kind(), PermissionQueryErrorKind::LookupFailed);
    assert_eq!(error.message(), Some(format!("{NOT_FOUND_MESSAGE}: {padded}")));
    assert_eq!(harness.registry_repository.lookups(), vec![padded]);
}

#[tokio::test]
async fn whitespace_only_package_name_is_left_to_the_registry() {
    let harness = create_query_harness();

    let error = harness
        .service
        .handle_get_app_permissions(get_app_permissions_query("   "))
        .await
        .expect_err("lookup failure expected");

    assert_eq!(error.code(), "PERMISSION_ERROR");
    assert_eq!(harness.registry_repository.lookups(), vec!["   "]);
}

#[tokio::test]
async fn concurrent_queries_do_not_interfere() {
    let harness = create_query_harness();
    harness
        .registry_repository
        .install_package(EXAMPLE_PACKAGE, Some(vec![CAMERA_PERMISSION]));
    harness
        .registry_repository
        .install_package(QUIET_PACKAGE, Some(vec![INTERNET_PERMISSION]));
    let service = Arc::new(harness.service);

    let camera = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .handle_get_app_permissions(get_app_permissions_query(EXAMPLE_PACKAGE))
                .await
        })
    };
    let internet = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .handle_get_app_permissions(get_app_permissions_query(QUIET_PACKAGE))
                .await
        })
    };

    let camera = camera.await.expect("task joined").expect("permissions");
    let internet = internet.await.expect("task joined").expect("permissions");

    assert!(camera.same_permissions_as(&[CAMERA_PERMISSION]));
    assert!(internet.same_permissions_as(&[INTERNET_PERMISSION]));
}
