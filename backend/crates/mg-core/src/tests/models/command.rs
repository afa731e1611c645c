use crate::{
    Command, CreateProjectInput, DeleteProjectInput, MutationOperation,
    SetProjectDescriptionInput, SetProjectNameInput, TenantId,
};

use uuid::Uuid;

#[test]
fn test_command_operation_and_project_id() {
    let project_id = Uuid::new_v4();

    let create = Command::CreateProject(CreateProjectInput {
        tenant_id: TenantId::new(Uuid::new_v4()),
        name: "A".to_string(),
        description: None,
    });
    assert_eq!(create.operation(), MutationOperation::CreateProject);
    assert_eq!(create.project_id(), None);

    let delete = Command::DeleteProject(DeleteProjectInput { project_id });
    assert_eq!(delete.operation(), MutationOperation::DeleteProject);
    assert_eq!(delete.project_id(), Some(project_id));

    let rename = Command::SetProjectName(SetProjectNameInput {
        project_id,
        name: "B".to_string(),
    });
    assert_eq!(rename.operation(), MutationOperation::SetProjectName);
    assert_eq!(rename.project_id(), Some(project_id));

    let redescribe = Command::SetProjectDescription(SetProjectDescriptionInput {
        project_id,
        description: None,
    });
    assert_eq!(
        redescribe.operation(),
        MutationOperation::SetProjectDescription
    );
    assert_eq!(redescribe.project_id(), Some(project_id));
}
