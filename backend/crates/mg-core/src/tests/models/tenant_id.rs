use crate::{CoreError, TenantId};

use std::str::FromStr;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_hyphenated_uuid_when_parsed_then_ok() {
    let raw = "550e8400-e29b-41d4-a716-446655440000";

    let tenant_id = TenantId::from_str(raw).unwrap();

    assert_that!(tenant_id.to_string(), eq(raw));
}

#[test]
fn given_simple_uuid_form_when_parsed_then_rejected() {
    let result = TenantId::from_str("550e8400e29b41d4a716446655440000");

    assert!(matches!(result, Err(CoreError::InvalidTenantId { .. })));
}

#[test]
fn given_empty_string_when_parsed_then_rejected() {
    assert_that!(TenantId::from_str(""), err(anything()));
}

#[test]
fn given_right_length_garbage_when_parsed_then_uuid_error() {
    let result = TenantId::from_str("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz");

    assert!(matches!(result, Err(CoreError::Uuid { .. })));
}

#[test]
fn given_nil_uuid_when_checked_then_is_nil() {
    let tenant_id = TenantId::new(Uuid::nil());

    assert_that!(tenant_id.is_nil(), eq(true));
}

#[test]
fn given_tenant_id_when_serialized_then_plain_string() {
    let id = Uuid::new_v4();
    let json = serde_json::to_string(&TenantId::new(id)).unwrap();

    assert_eq!(json, format!("\"{}\"", id));
}
