use crate::reflect::TypeDescriptor;

/// Table-level metadata of a mapped type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub table_name: String,

    /// Comma separated primary key column names. Composite keys list more
    /// than one name.
    pub primary_key: String,

    /// True if the primary key is generated by the database.
    pub auto_increment: bool,

    pub sequence_name: Option<String>,

    /// Short, process-unique alias used when generating queries.
    pub auto_alias: String,
}

impl TableInfo {
    /// Resolves table metadata from a type's annotations.
    ///
    /// The table name defaults to the type name and the primary key to
    /// `Id`, generated by the database. The alias is left empty; it is
    /// allocated by the registry resolving the table.
    pub fn from_type(ty: &TypeDescriptor) -> TableInfo {
        let attrs = ty.table_attrs();

        TableInfo {
            table_name: attrs
                .table_name
                .clone()
                .unwrap_or_else(|| ty.name().to_string()),
            primary_key: attrs.primary_key.clone().unwrap_or_else(|| "Id".to_string()),
            auto_increment: attrs.auto_increment.unwrap_or(true),
            sequence_name: attrs.sequence_name.clone(),
            auto_alias: String::new(),
        }
    }

    /// Primary key column names, trimmed, in declaration order.
    pub fn primary_key_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.primary_key
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn is_composite_key(&self) -> bool {
        self.primary_key_names().nth(1).is_some()
    }
}
