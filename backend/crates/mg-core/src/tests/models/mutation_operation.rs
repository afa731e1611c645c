use crate::MutationOperation;

use std::str::FromStr;

#[test]
fn test_mutation_operation_as_str() {
    assert_eq!(MutationOperation::CreateProject.as_str(), "create_project");
    assert_eq!(MutationOperation::DeleteProject.as_str(), "delete_project");
    assert_eq!(MutationOperation::SetProjectName.as_str(), "set_project_name");
    assert_eq!(
        MutationOperation::SetProjectDescription.as_str(),
        "set_project_description"
    );
}

#[test]
fn test_mutation_operation_from_str_matches_as_str() {
    for operation in [
        MutationOperation::CreateProject,
        MutationOperation::DeleteProject,
        MutationOperation::SetProjectName,
        MutationOperation::SetProjectDescription,
    ] {
        assert_eq!(
            MutationOperation::from_str(operation.as_str()).unwrap(),
            operation
        );
    }
}

#[test]
fn test_mutation_operation_from_str_rejects_unknown() {
    assert!(MutationOperation::from_str("archive_project").is_err());
    assert!(MutationOperation::from_str("CreateProject").is_err());
    assert!(MutationOperation::from_str("").is_err());
}
