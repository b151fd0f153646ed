#![allow(dead_code)]

use rowmap::{Registry, TypeDescriptor};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: Option<String>,
    pub address: Address,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineItem {
    pub id: i64,
    pub order_id: i64,
    pub sku: String,
    pub quantity: i32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub total: f64,
    pub customer: Customer,
    pub lines: Vec<LineItem>,
    pub line_count: i32,
}

pub fn address() -> TypeDescriptor {
    TypeDescriptor::builder::<Address>()
        .column("Street", |a| &a.street, |a| &mut a.street)
        .column("City", |a| &a.city, |a| &mut a.city)
        .default_constructor()
        .build()
}

pub fn customer() -> TypeDescriptor {
    TypeDescriptor::builder::<Customer>()
        .column("Name", |c| &c.name, |c| &mut c.name)
        .column("Email", |c| &c.email, |c| &mut c.email)
        .owned("Address", |c| &c.address, |c| &mut c.address)
        .default_constructor()
        .build()
}

pub fn line_item() -> TypeDescriptor {
    TypeDescriptor::builder::<LineItem>()
        .column("Id", |l| &l.id, |l| &mut l.id)
        .column("OrderId", |l| &l.order_id, |l| &mut l.order_id)
        .column("Sku", |l| &l.sku, |l| &mut l.sku)
        .column("Quantity", |l| &l.quantity, |l| &mut l.quantity)
        .default_constructor()
        .build()
}

pub fn order() -> TypeDescriptor {
    TypeDescriptor::builder::<Order>()
        .table_name("Orders")
        .column("Id", |o| &o.id, |o| &mut o.id)
        .column("Total", |o| &o.total, |o| &mut o.total)
        .owned("Customer", |o| &o.customer, |o| &mut o.customer)
        .many("Lines", |o| &o.lines, |o| &mut o.lines)
        .with(|attrs| attrs.reference_member = Some("OrderId".to_string()))
        .property("LineCount", |o| &o.line_count, |o| &mut o.line_count)
        .with(|attrs| attrs.result = true)
        .default_constructor()
        .build()
}

/// Builder with the order graph registered.
pub fn order_registry() -> rowmap::Builder {
    let mut builder = Registry::builder();
    builder
        .register(order())
        .register(customer())
        .register(address())
        .register(line_item());
    builder
}

pub fn sample_order() -> Order {
    Order {
        id: 42,
        total: 99.5,
        customer: Customer {
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            address: Address {
                street: "1 Analytical Way".to_string(),
                city: "London".to_string(),
            },
        },
        lines: vec![LineItem {
            id: 1,
            order_id: 42,
            sku: "ENGINE".to_string(),
            quantity: 2,
        }],
        line_count: 1,
    }
}

/// A category nesting categories of its own type.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub children: Vec<Category>,
}

pub fn category() -> TypeDescriptor {
    TypeDescriptor::builder::<Category>()
        .column("Id", |c| &c.id, |c| &mut c.id)
        .column("Name", |c| &c.name, |c| &mut c.name)
        .many("Children", |c| &c.children, |c| &mut c.children)
        .build()
}

#[derive(Debug, Default)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub books: Vec<Book>,
}

#[derive(Debug, Default)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Option<Author>,
}

pub fn author() -> TypeDescriptor {
    TypeDescriptor::builder::<Author>()
        .column("Id", |a| &a.id, |a| &mut a.id)
        .column("Name", |a| &a.name, |a| &mut a.name)
        .many("Books", |a| &a.books, |a| &mut a.books)
        .build()
}

pub fn book() -> TypeDescriptor {
    TypeDescriptor::builder::<Book>()
        .column("Id", |b| &b.id, |b| &mut b.id)
        .column("Title", |b| &b.title, |b| &mut b.title)
        .one_to_one("Author", |b| &b.author, |b| &mut b.author)
        .build()
}

/// Names of the given columns, in order.
pub fn names<'a>(columns: impl IntoIterator<Item = &'a std::sync::Arc<rowmap::Column>>) -> Vec<&'a str> {
    columns.into_iter().map(|column| column.name.as_str()).collect()
}
