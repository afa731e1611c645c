use crate::{Project, TenantId};

use uuid::Uuid;

#[test]
fn test_project_new() {
    let tenant_id = TenantId::new(Uuid::new_v4());
    let project = Project::new(tenant_id, "Apollo".to_string(), None);

    assert_eq!(project.tenant_id, tenant_id);
    assert_eq!(project.name, "Apollo");
    assert_eq!(project.description, None);
    assert_eq!(project.version, 1);
    assert_eq!(project.created_at, project.updated_at);
    assert!(!project.id.is_nil());
}

#[test]
fn test_project_ids_are_unique() {
    let tenant_id = TenantId::new(Uuid::new_v4());
    let a = Project::new(tenant_id, "A".to_string(), None);
    let b = Project::new(tenant_id, "A".to_string(), None);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_project_rename_bumps_version_and_keeps_tenant() {
    let tenant_id = TenantId::new(Uuid::new_v4());
    let mut project = Project::new(tenant_id, "A".to_string(), Some("desc".to_string()));

    project.rename("B".to_string());

    assert_eq!(project.name, "B");
    assert_eq!(project.version, 2);
    assert_eq!(project.tenant_id, tenant_id);
    assert_eq!(project.description.as_deref(), Some("desc"));
}

#[test]
fn test_project_redescribe_none_clears() {
    let tenant_id = TenantId::new(Uuid::new_v4());
    let mut project = Project::new(tenant_id, "A".to_string(), Some("desc".to_string()));

    project.redescribe(None);
    assert_eq!(project.description, None);

    project.redescribe(None);
    assert_eq!(project.description, None);
    assert_eq!(project.version, 3);
}

#[test]
fn test_project_is_owned_by() {
    let owner = TenantId::new(Uuid::new_v4());
    let other = TenantId::new(Uuid::new_v4());
    let project = Project::new(owner, "A".to_string(), None);

    assert!(project.is_owned_by(owner));
    assert!(!project.is_owned_by(other));
}
