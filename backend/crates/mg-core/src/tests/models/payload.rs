use crate::{MutationPayload, ProjectIdPayload, SuccessPayload};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_absent_project_id_when_serialized_then_id_is_null() {
    let json = serde_json::to_value(MutationPayload::from(ProjectIdPayload::absent())).unwrap();

    assert_that!(json, eq(&serde_json::json!({ "id": null })));
}

#[test]
fn given_found_project_id_when_serialized_then_id_is_string() {
    let id = Uuid::new_v4();
    let json = serde_json::to_value(MutationPayload::from(ProjectIdPayload::found(id))).unwrap();

    assert_that!(json, eq(&serde_json::json!({ "id": id.to_string() })));
}

#[test]
fn given_success_payload_when_serialized_then_success_field() {
    let json = serde_json::to_value(MutationPayload::from(SuccessPayload::from(false))).unwrap();

    assert_that!(json, eq(&serde_json::json!({ "success": false })));
}

#[test]
fn given_success_json_when_deserialized_then_success_variant() {
    let payload: MutationPayload = serde_json::from_str(r#"{"success":true}"#).unwrap();

    assert_that!(payload.success(), some(eq(true)));
    assert_that!(payload.project_id(), none());
}

#[test]
fn given_null_id_json_when_deserialized_then_absent_project_id() {
    let payload: MutationPayload = serde_json::from_str(r#"{"id":null}"#).unwrap();

    assert_that!(payload, eq(MutationPayload::ProjectId(ProjectIdPayload::absent())));
}
