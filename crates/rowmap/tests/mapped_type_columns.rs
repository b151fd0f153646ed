mod common;

use common::*;
use pretty_assertions::assert_eq;
use rowmap::{MappedType, ReferenceKind, Registry, TypeDescriptor, TypeKey, VersionColumnType};

#[test]
fn simple_members_map_one_column_each() {
    init_logging();

    let registry = Registry::builder().register(line_item()).build().unwrap();
    let mapped = registry.mapped::<LineItem>().unwrap();

    assert_eq!(
        names(mapped.columns()),
        ["Id", "OrderId", "Sku", "Quantity"]
    );
    assert_eq!(names(mapped.all_columns()), names(mapped.columns()));
    assert_eq!(
        mapped
            .query_columns()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>(),
        ["Id", "OrderId", "Sku", "Quantity"]
    );
    assert_eq!(mapped.table().table_name, "LineItem");
    assert_eq!(mapped.table().auto_alias, "LI");
}

#[test]
fn owned_objects_are_flattened_with_prefix() {
    let registry = order_registry().build().unwrap();
    let mapped = registry.mapped::<Order>().unwrap();

    assert_eq!(
        names(mapped.columns()),
        [
            "Id",
            "Total",
            "Customer__Name",
            "Customer__Email",
            "Customer__Address__Street",
            "Customer__Address__City",
            "LineCount",
        ]
    );

    let customer = mapped.member("Customer").unwrap();
    assert!(customer.is_owned());
    assert!(customer.column.is_none());
    assert_eq!(customer.children.len(), 3);

    let city = mapped.column("Customer__Address__City").unwrap();
    assert_eq!(city.path(), ["Customer", "Address", "City"]);
    assert_eq!(city.table.table_name, "Orders");
}

#[test]
fn related_columns_only_in_all_columns() {
    let registry = order_registry().build().unwrap();
    let mapped = registry.mapped::<Order>().unwrap();

    assert_eq!(
        names(mapped.all_columns()),
        [
            "Id",
            "Total",
            "Customer__Name",
            "Customer__Email",
            "Customer__Address__Street",
            "Customer__Address__City",
            "Lines",
            "Id",
            "OrderId",
            "Sku",
            "Quantity",
            "LineCount",
        ]
    );

    assert!(mapped.column("Lines").is_none());
    assert!(mapped.column("Sku").is_none());

    let lines = mapped.member("Lines").unwrap();
    assert_eq!(lines.reference, ReferenceKind::Many);
    assert!(lines.is_enumerable);
    assert_eq!(lines.reference_member.as_deref(), Some("OrderId"));

    // Related columns keep their own names and belong to the related table.
    let sku = lines.child("Sku").unwrap().column.as_ref().unwrap();
    assert_eq!(sku.name, "Sku");
    assert_eq!(sku.table.table_name, "LineItem");
    assert_eq!(sku.path(), ["Lines", "Sku"]);
}

#[test]
fn query_columns_skip_result_and_relations() {
    let registry = order_registry().build().unwrap();
    let mapped = registry.mapped::<Order>().unwrap();

    let selected: Vec<_> = mapped
        .query_columns()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();

    assert_eq!(
        selected,
        [
            "Id",
            "Total",
            "Customer__Name",
            "Customer__Email",
            "Customer__Address__Street",
            "Customer__Address__City",
        ]
    );

    let line_count = mapped.column("LineCount").unwrap();
    assert!(line_count.result);
    assert!(mapped
        .query_columns()
        .iter()
        .all(|(name, column)| *name == column.name && mapped.column(name).is_some()));
}

#[test]
fn column_lookup_ignores_case() {
    let registry = order_registry().build().unwrap();
    let mapped = registry.mapped::<Order>().unwrap();

    let column = mapped.column("customer__address__city").unwrap();
    assert_eq!(column.name, "Customer__Address__City");
    assert!(mapped.column("ID").is_some());
}

#[test]
fn complex_prefix_overrides_member_name() {
    #[derive(Default)]
    struct Shipment {
        id: i64,
        to: Address,
    }

    let shipment = TypeDescriptor::builder::<Shipment>()
        .column("Id", |s| &s.id, |s| &mut s.id)
        .owned("To", |s| &s.to, |s| &mut s.to)
        .with(|attrs| attrs.complex_prefix = Some("Dest".to_string()))
        .build();

    let registry = Registry::builder()
        .register(shipment)
        .register(address())
        .build()
        .unwrap();
    let mapped = registry.mapped::<Shipment>().unwrap();

    assert_eq!(
        names(mapped.columns()),
        ["Id", "Dest__Street", "Dest__City"]
    );
}

#[test]
fn ignored_and_renamed_members() {
    #[derive(Default)]
    struct Note {
        id: i64,
        body: String,
        draft: String,
    }

    let note = TypeDescriptor::builder::<Note>()
        .column("Id", |n| &n.id, |n| &mut n.id)
        .column("Body", |n| &n.body, |n| &mut n.body)
        .with(|attrs| attrs.column_name = Some("note_body".to_string()))
        .column("Draft", |n| &n.draft, |n| &mut n.draft)
        .with(|attrs| attrs.ignore = true)
        .build();

    let registry = Registry::builder().register(note).build().unwrap();
    let mapped = registry.mapped::<Note>().unwrap();

    assert_eq!(names(mapped.columns()), ["Id", "note_body"]);
    assert!(mapped.member("Draft").is_none());
}

#[test]
fn column_flags_are_copied_from_annotations() {
    #[derive(Default)]
    struct Ledger {
        id: i64,
        version: i64,
        balance: f64,
    }

    let ledger = TypeDescriptor::builder::<Ledger>()
        .column("Id", |l| &l.id, |l| &mut l.id)
        .column("Version", |l| &l.version, |l| &mut l.version)
        .with(|attrs| attrs.version = Some(VersionColumnType::RowVersion))
        .column("Balance", |l| &l.balance, |l| &mut l.balance)
        .with(|attrs| {
            attrs.computed = true;
            attrs.force_utc = true;
            attrs.alias = Some("bal".to_string());
            attrs.column_type = Some(TypeKey::of::<i64>());
        })
        .build();

    let registry = Registry::builder().register(ledger).build().unwrap();
    let mapped = registry.mapped::<Ledger>().unwrap();

    let version = mapped.column("Version").unwrap();
    assert!(version.version);
    assert_eq!(version.version_type, VersionColumnType::RowVersion);

    let balance = mapped.column("Balance").unwrap();
    assert!(balance.computed);
    assert!(balance.force_utc);
    assert_eq!(balance.alias.as_deref(), Some("bal"));
    assert_eq!(balance.column_type, Some(TypeKey::of::<i64>()));
    assert!(!balance.version);
}

#[test]
fn colliding_column_names_fail() {
    #[derive(Default)]
    struct Contact {
        home: Address,
        work: Address,
    }

    let contact = TypeDescriptor::builder::<Contact>()
        .owned("Home", |c| &c.home, |c| &mut c.home)
        .with(|attrs| attrs.complex_prefix = Some("Addr".to_string()))
        .owned("Work", |c| &c.work, |c| &mut c.work)
        .with(|attrs| attrs.complex_prefix = Some("ADDR".to_string()))
        .build();

    let registry = Registry::builder()
        .register(contact)
        .register(address())
        .build()
        .unwrap();

    let err = registry.mapped::<Contact>().unwrap_err();
    assert!(err.is_duplicate_column());
    assert!(err.to_string().contains("ADDR__Street"));
}

#[test]
fn rebuilding_is_structurally_identical() {
    let registry = order_registry().build().unwrap();
    let key = TypeKey::of::<Order>();

    let first = MappedType::build(&registry, key).unwrap();
    let second = MappedType::build(&registry, key).unwrap();

    assert_eq!(names(first.columns()), names(second.columns()));
    assert_eq!(names(first.all_columns()), names(second.all_columns()));
    assert_eq!(
        first
            .query_columns()
            .iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>(),
        second
            .query_columns()
            .iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
    );
    assert_eq!(first.table(), second.table());
}
