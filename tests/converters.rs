mod common;

use ormlite::error::OrmLiteError;
use ormlite::field::adapters::{BOOLEAN_NUMBER, CHARACTER_COMPAT};
use ormlite::field::persisters::{boolean, number, text};
use ormlite::field::{DataType, FieldConverter, FieldType};
use ormlite::prelude::*;
use ormlite::{DialectExt, EnumConstant};

fn field(name: &str, data_type: DataType, dialect: Dialect) -> FieldType {
    FieldType::builder(name, data_type)
        .build(dialect)
        .unwrap()
}

#[test]
fn boolean_number_end_to_end() {
    let field = field("flag", DataType::Boolean, Dialect::SQLite);
    let converter = field.converter();
    assert_eq!(converter.name(), BOOLEAN_NUMBER.name);

    assert_eq!(
        converter.java_to_sql_arg(&field, &SqlValue::Bool(true)).unwrap(),
        SqlValue::Byte(1)
    );

    let zero = BufferedResults::single_row([("flag", SqlValue::Byte(0))]);
    assert_eq!(
        converter.result_to_java(&field, &zero, 0).unwrap(),
        SqlValue::Bool(false)
    );

    assert_eq!(
        converter.parse_default_string(&field, "true").unwrap(),
        SqlValue::Byte(1)
    );
}

#[test]
fn boolean_byte_only_one_is_true() {
    let field = field("flag", DataType::Boolean, Dialect::MySQL);
    for (byte, expected) in [(0i8, false), (1, true), (2, false), (-1, false)] {
        assert_eq!(
            field.sql_arg_to_java(SqlValue::Byte(byte), 0).unwrap(),
            SqlValue::Bool(expected),
            "byte {byte}"
        );
    }
}

#[test]
fn native_boolean_dialects_keep_plain_converter() {
    let field = field("flag", DataType::Boolean, Dialect::PostgreSQL);
    assert!(matches!(field.converter(), FieldConverter::Persister(_)));
    assert_eq!(
        field.java_to_sql_arg(&SqlValue::Bool(true)).unwrap(),
        SqlValue::Bool(true)
    );
}

#[test]
fn generated_keys_narrow_by_truncation() {
    let byte = field("id", DataType::Byte, Dialect::SQLite);
    assert_eq!(byte.convert_id_number(257).unwrap(), SqlValue::Byte(1));

    let short = field("id", DataType::ShortObj, Dialect::SQLite);
    assert_eq!(short.convert_id_number(65_537).unwrap(), SqlValue::Short(1));

    let int = field("id", DataType::Integer, Dialect::SQLite);
    assert_eq!(
        int.convert_id_number(i64::from(i32::MAX) + 1).unwrap(),
        SqlValue::Int(i32::MIN)
    );
}

#[test]
fn round_trips_are_exact() {
    let dialect = Dialect::H2;
    let cases = [
        (DataType::Boolean, SqlValue::Bool(false)),
        (DataType::Byte, SqlValue::Byte(-128)),
        (DataType::Short, SqlValue::Short(i16::MAX)),
        (DataType::Integer, SqlValue::Int(-7)),
        (DataType::LongObj, SqlValue::Long(i64::MIN)),
        (DataType::Double, SqlValue::Double(0.125)),
        (DataType::String, SqlValue::Text("héllo".into())),
        (DataType::ByteArray, SqlValue::Bytes(vec![0, 255, 7])),
        (DataType::Char, SqlValue::Char('z')),
        (DataType::BigInteger, SqlValue::BigInteger(-(1i128 << 100))),
    ];
    for (data_type, native) in cases {
        let field = field("v", data_type, dialect);
        let wire = field.java_to_sql_arg(&native).unwrap();
        assert_eq!(
            field.sql_arg_to_java(wire, 0).unwrap(),
            native,
            "{data_type}"
        );
    }
}

#[test]
fn defaults_parse_or_fail() {
    let dialect = Dialect::SQLite;
    let parsed = FieldType::builder("n", DataType::Integer)
        .default_value(" 42 ")
        .build(dialect)
        .unwrap();
    assert_eq!(parsed.default_value(), Some(&SqlValue::Int(42)));
    assert_eq!(parsed.default_native().unwrap(), Some(SqlValue::Int(42)));

    let invalid = FieldType::builder("n", DataType::Integer)
        .default_value("forty-two")
        .build(dialect);
    assert!(matches!(invalid, Err(OrmLiteError::Config(_))));

    let converter = FieldConverter::Persister(&boolean::BOOLEAN);
    let field = field("b", DataType::Boolean, Dialect::PostgreSQL);
    assert!(matches!(
        converter.parse_default_string(&field, "yes"),
        Err(OrmLiteError::Parse(_))
    ));
}

#[test]
fn character_adapter_differs_only_in_char_operations() {
    let plain_field = field("grade", DataType::Char, Dialect::SQLite);
    let derby_field = field("grade", DataType::Char, Dialect::Derby);
    let plain = plain_field.converter();
    let adapted = derby_field.converter();
    assert_eq!(adapted.name(), CHARACTER_COMPAT.name);

    // special-cased: a character binds and reads as one-character text
    assert_eq!(
        plain.java_to_sql_arg(&plain_field, &SqlValue::Char('A')).unwrap(),
        SqlValue::Char('A')
    );
    assert_eq!(
        adapted.java_to_sql_arg(&derby_field, &SqlValue::Char('A')).unwrap(),
        SqlValue::Text("A".into())
    );
    let results = BufferedResults::single_row([("grade", SqlValue::Text("B".into()))]);
    assert_eq!(
        adapted.result_to_sql_arg(&derby_field, &results, 0).unwrap(),
        SqlValue::Text("B".into())
    );

    // forwarded: identical to the wrapped converter
    assert_eq!(
        adapted.parse_default_string(&derby_field, "Q").unwrap(),
        plain.parse_default_string(&plain_field, "Q").unwrap()
    );
    assert_eq!(
        adapted.result_to_java(&derby_field, &results, 0).unwrap(),
        plain.result_to_java(&plain_field, &results, 0).unwrap()
    );
    assert_eq!(adapted.sql_type(), plain.sql_type());
    assert_eq!(adapted.is_escaped_value(), plain.is_escaped_value());
}

#[test]
fn dialect_chooses_adapters() {
    let byte = Dialect::Derby.field_converter(&number::BYTE);
    assert!(matches!(byte, FieldConverter::Persister(_)));
    let character = Dialect::Derby.field_converter(&text::CHAR_OBJ);
    assert!(matches!(character, FieldConverter::Adapted { .. }));
    let boolean = Dialect::H2.field_converter(&boolean::BOOLEAN_OBJ);
    assert!(matches!(boolean, FieldConverter::Persister(_)));
}

#[test]
fn enums_resolve_by_name_and_ordinal() {
    let dialect = Dialect::SQLite;
    let by_name = FieldType::builder("status", DataType::EnumString)
        .enum_constants(["OPEN", "CLOSED"])
        .unknown_enum_name("OPEN")
        .build(dialect)
        .unwrap();
    assert_eq!(
        by_name
            .java_to_sql_arg(&SqlValue::Enum(EnumConstant::new("CLOSED", 1)))
            .unwrap(),
        SqlValue::Text("CLOSED".into())
    );
    assert_eq!(
        by_name
            .sql_arg_to_java(SqlValue::Text("ARCHIVED".into()), 0)
            .unwrap(),
        SqlValue::Enum(EnumConstant::new("OPEN", 0))
    );

    let by_ordinal = FieldType::builder("status", DataType::EnumInteger)
        .enum_constants(["OPEN", "CLOSED"])
        .build(dialect)
        .unwrap();
    assert_eq!(
        by_ordinal.sql_arg_to_java(SqlValue::Int(1), 0).unwrap(),
        SqlValue::Enum(EnumConstant::new("CLOSED", 1))
    );
    assert!(matches!(
        by_ordinal.sql_arg_to_java(SqlValue::Int(9), 0),
        Err(OrmLiteError::Conversion(_))
    ));
}

#[test]
fn table_config_maps_rows() {
    let table = common::account_table(Dialect::SQLite);
    assert_eq!(table.id_field().unwrap().column_name(), "id");
    assert_eq!(table.version_field().unwrap().column_name(), "version");

    let results = BufferedResults::single_row([
        ("id", SqlValue::Long(3)),
        ("name", SqlValue::Text("ann".into())),
        ("active", SqlValue::Long(2)),
        ("grade", SqlValue::Text("A".into())),
        ("status", SqlValue::Text("CLOSED".into())),
    ]);
    let row = table.map_row(&results).unwrap();
    assert_eq!(row.get("id"), Some(&SqlValue::Long(3)));
    assert_eq!(row.get("ACTIVE"), Some(&SqlValue::Bool(false)));
    assert_eq!(row.get("grade"), Some(&SqlValue::Char('A')));
    assert_eq!(
        row.get("status"),
        Some(&SqlValue::Enum(EnumConstant::new("CLOSED", 1)))
    );
    assert_eq!(row.get("version"), None);
}
