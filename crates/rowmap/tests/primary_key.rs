mod common;

use common::*;
use pretty_assertions::assert_eq;
use rowmap::{Registry, TypeDescriptor, Value};

#[derive(Debug, Default)]
struct Membership {
    id: i64,
    tenant_id: i64,
    role: String,
}

fn membership(primary_key: &str) -> TypeDescriptor {
    TypeDescriptor::builder::<Membership>()
        .primary_key(primary_key)
        .auto_increment(false)
        .column("Id", |m| &m.id, |m| &mut m.id)
        .column("TenantId", |m| &m.tenant_id, |m| &mut m.tenant_id)
        .column("Role", |m| &m.role, |m| &mut m.role)
        .build()
}

fn sample() -> Membership {
    Membership {
        id: 5,
        tenant_id: 7,
        role: "admin".to_string(),
    }
}

#[test]
fn composite_key_in_declared_order() {
    init_logging();

    let registry = Registry::builder()
        .register(membership("Id, TenantId"))
        .build()
        .unwrap();
    let mapped = registry.mapped::<Membership>().unwrap();

    assert_eq!(
        mapped.primary_key_values(&sample()),
        [Value::I64(5), Value::I64(7)]
    );

    let reversed = Registry::builder()
        .register(membership("TenantId,Id"))
        .build()
        .unwrap();
    assert_eq!(
        reversed
            .mapped::<Membership>()
            .unwrap()
            .primary_key_values(&sample()),
        [Value::I64(7), Value::I64(5)]
    );
}

#[test]
fn key_names_match_ignoring_case() {
    let registry = Registry::builder()
        .register(membership(" id ,tenantid "))
        .build()
        .unwrap();
    let mapped = registry.mapped::<Membership>().unwrap();

    assert_eq!(names(mapped.primary_key_columns()), ["Id", "TenantId"]);
}

#[test]
fn unresolved_key_names_are_left_out() {
    let registry = Registry::builder()
        .register(membership("Id, Missing, TenantId"))
        .build()
        .unwrap();
    let mapped = registry.mapped::<Membership>().unwrap();

    let values = mapped.primary_key_values(&sample());
    assert_eq!(values, [Value::I64(5), Value::I64(7)]);
    assert!(values.len() < mapped.table().primary_key_names().count());
}

#[test]
fn default_key_is_id() {
    let registry = order_registry().build().unwrap();
    let mapped = registry.mapped::<Order>().unwrap();

    assert_eq!(mapped.table().primary_key, "Id");
    assert_eq!(mapped.primary_key_values(&sample_order()), [Value::I64(42)]);
}

#[test]
fn extractor_is_resolved_once() {
    let registry = Registry::builder()
        .register(membership("Id, TenantId"))
        .build()
        .unwrap();
    let mapped = registry.mapped::<Membership>().unwrap();

    let first = mapped.primary_key_columns().as_ptr();
    mapped.primary_key_values(&sample());
    assert_eq!(first, mapped.primary_key_columns().as_ptr());
}

#[test]
fn foreign_object_reads_as_null() {
    let registry = Registry::builder()
        .register(membership("Id"))
        .build()
        .unwrap();
    let mapped = registry.mapped::<Membership>().unwrap();

    assert_eq!(mapped.primary_key_values(&sample_order()), [Value::Null]);
}
