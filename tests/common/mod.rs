#![allow(dead_code)]

use ormlite::prelude::*;
use ormlite::table::TableConfig;
use std::sync::Arc;

pub const ACCOUNT_TOML: &str = r#"
table_name = "account"

[[fields]]
field_name = "id"
data_type = "LONG"
generated_id = true

[[fields]]
field_name = "name"
data_type = "STRING"
can_be_null = false

[[fields]]
field_name = "active"
data_type = "BOOLEAN"
default_value = "true"

[[fields]]
field_name = "level"
data_type = "BYTE"
default_value = "0"

[[fields]]
field_name = "grade"
data_type = "CHAR"
default_value = "C"

[[fields]]
field_name = "status"
data_type = "ENUM_STRING"
enum_constants = ["OPEN", "CLOSED"]
unknown_enum_name = "OPEN"

[[fields]]
field_name = "version"
data_type = "INTEGER"
version = true
"#;

pub fn account_table(dialect: Dialect) -> Arc<TableInfo> {
    let config = TableConfig::from_toml_str(ACCOUNT_TOML).expect("account config parses");
    Arc::new(config.into_table_info(dialect).expect("account config is valid"))
}

/// `foo(id, a, c)` and `bar(id, b, x)`, all integer columns.
pub fn foo_and_bar(dialect: Dialect) -> (Arc<TableInfo>, Arc<TableInfo>) {
    let table = |name: &str, columns: &[&str]| {
        let fields = columns
            .iter()
            .map(|column| {
                FieldType::builder(*column, DataType::Integer)
                    .id(*column == "id")
                    .build(dialect)
                    .expect("integer field builds")
            })
            .collect();
        Arc::new(TableInfo::new(name, fields).expect("table builds"))
    };
    (table("foo", &["id", "a", "c"]), table("bar", &["id", "b", "x"]))
}

pub fn values(query: &PreparedQuery) -> Vec<SqlValue> {
    query.bind_values().expect("all arguments are set")
}
