mod column_info;
pub use column_info::{AttributeResolver, ColumnInfo, ResolveColumnInfo};

mod reference;
pub use reference::{ReferenceKind, VersionColumnType};

mod table_info;
pub use table_info::TableInfo;
