use crate::{Cli, Commands};

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_create_arguments_when_parsed_then_command_populated() {
    let cli = Cli::try_parse_from([
        "mg",
        "create-project",
        "--tenant-id",
        "6f1c2f3a-8d4b-4e2a-9c7d-0a1b2c3d4e5f",
        "--name",
        "Apollo",
    ])
    .unwrap();

    assert_that!(
        cli.command,
        eq(&Commands::CreateProject {
            tenant_id: "6f1c2f3a-8d4b-4e2a-9c7d-0a1b2c3d4e5f".to_string(),
            name: "Apollo".to_string(),
            description: None,
        })
    );
    assert_that!(cli.pretty, eq(false));
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from([
        "mg",
        "delete-project",
        "0d9a7a1e-5b7c-4f8e-a2d3-112233445566",
        "--tenant-scope",
        "6f1c2f3a-8d4b-4e2a-9c7d-0a1b2c3d4e5f",
        "--idempotency-key",
        "retry-1",
        "--pretty",
    ])
    .unwrap();

    assert_that!(
        cli.tenant_scope.as_deref(),
        some(eq("6f1c2f3a-8d4b-4e2a-9c7d-0a1b2c3d4e5f"))
    );
    assert_that!(cli.idempotency_key.as_deref(), some(eq("retry-1")));
    assert_that!(cli.pretty, eq(true));
}

#[test]
fn given_rename_without_name_when_parsed_then_error() {
    let result = Cli::try_parse_from(["mg", "set-project-name", "some-id"]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_execute_arguments_when_parsed_then_raw_input_kept() {
    let cli = Cli::try_parse_from([
        "mg",
        "execute",
        "--operation",
        "delete_project",
        "--input",
        r#"{"project_id":"x"}"#,
    ])
    .unwrap();

    assert_that!(
        cli.command,
        eq(&Commands::Execute {
            operation: "delete_project".to_string(),
            input: r#"{"project_id":"x"}"#.to_string(),
        })
    );
}
