//! Behaviour every `ProjectStore` implementation must share.

use crate::common::test_tenant;

use mg_db::ProjectStore;

use googletest::prelude::*;
use uuid::Uuid;

pub async fn created_project_is_readable_and_tenant_scoped<S: ProjectStore>(store: &S) {
    // Given: A tenant
    let tenant_id = test_tenant();

    // When: Creating a project
    let id = store
        .create(tenant_id, "Apollo".to_string(), Some("Moonshot".to_string()))
        .await
        .unwrap();

    // Then: It reads back with the given fields
    let found = store.find_by_id(id).await.unwrap().unwrap();
    assert_that!(found.id, eq(id));
    assert_that!(found.tenant_id, eq(tenant_id));
    assert_that!(found.name, eq("Apollo"));
    assert_that!(found.description, some(eq("Moonshot")));
    assert_that!(found.version, eq(1));
}

pub async fn creates_assign_distinct_ids<S: ProjectStore>(store: &S) {
    let tenant_id = test_tenant();

    let a = store.create(tenant_id, "Same".to_string(), None).await.unwrap();
    let b = store.create(tenant_id, "Same".to_string(), None).await.unwrap();

    assert_that!(a, not(eq(b)));
}

pub async fn delete_twice_reports_true_then_false<S: ProjectStore>(store: &S) {
    // Given: An existing project
    let id = store
        .create(test_tenant(), "Doomed".to_string(), None)
        .await
        .unwrap();

    // When / Then: First delete removes it, second finds nothing
    assert_that!(store.delete(id).await.unwrap(), eq(true));
    assert_that!(store.delete(id).await.unwrap(), eq(false));
    assert_that!(store.find_by_id(id).await.unwrap(), none());
}

pub async fn mutations_on_missing_project_return_none<S: ProjectStore>(store: &S) {
    let missing = Uuid::new_v4();

    assert_that!(store.delete(missing).await.unwrap(), eq(false));
    assert_that!(
        store.rename(missing, "Nope".to_string()).await.unwrap(),
        none()
    );
    assert_that!(
        store
            .redescribe(missing, Some("Nope".to_string()))
            .await
            .unwrap(),
        none()
    );
    assert_that!(store.redescribe(missing, None).await.unwrap(), none());
}

pub async fn rename_changes_name_and_keeps_tenant<S: ProjectStore>(store: &S) {
    // Given
    let tenant_id = test_tenant();
    let id = store.create(tenant_id, "A".to_string(), None).await.unwrap();

    // When
    let renamed = store.rename(id, "B".to_string()).await.unwrap();

    // Then
    assert_that!(renamed, some(eq(id)));
    let found = store.find_by_id(id).await.unwrap().unwrap();
    assert_that!(found.name, eq("B"));
    assert_that!(found.tenant_id, eq(tenant_id));
    assert_that!(found.version, eq(2));
}

pub async fn clearing_description_is_idempotent<S: ProjectStore>(store: &S) {
    // Given: A project with a description
    let id = store
        .create(test_tenant(), "A".to_string(), Some("Old".to_string()))
        .await
        .unwrap();

    // When: Clearing it twice
    let first = store.redescribe(id, None).await.unwrap();
    let after_first = store.find_by_id(id).await.unwrap().unwrap();
    let second = store.redescribe(id, None).await.unwrap();
    let after_second = store.find_by_id(id).await.unwrap().unwrap();

    // Then: Both calls resolve to the project and the description stays cleared
    assert_that!(first, some(eq(id)));
    assert_that!(second, some(eq(id)));
    assert_that!(after_first.description, none());
    assert_that!(after_second.description, none());
    assert_that!(after_second.name, eq(&after_first.name));
}

pub async fn find_by_tenant_returns_only_owned_sorted<S: ProjectStore>(store: &S) {
    // Given: Projects in two tenants
    let t1 = test_tenant();
    let t2 = test_tenant();
    store.create(t1, "Zeta".to_string(), None).await.unwrap();
    store.create(t1, "Alpha".to_string(), None).await.unwrap();
    store.create(t2, "Other".to_string(), None).await.unwrap();

    // When
    let projects = store.find_by_tenant(t1).await.unwrap();

    // Then
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_that!(names, eq(&vec!["Alpha", "Zeta"]));
}
