//! Integral and floating-point converters
//!
//! Integral types accept any integral native value that fits their range when
//! binding, narrow generated keys by two's-complement truncation, and
//! increment with wrap-around as version columns.

use super::parse_str;
use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::field::converter::{ConverterOps, Persister};
use crate::results::DatabaseResults;
use crate::value::SqlValue;
use ormlite_types::SqlType;

fn out_of_range(field: &FieldType, value: &SqlValue, target: &str) -> OrmLiteError {
    OrmLiteError::Conversion(format!(
        "field '{}': {} value {value} out of range for {target}",
        field.field_name(),
        value.kind()
    ))
}

macro_rules! integral_persister {
    ($prefix:ident, $ty:ty, $variant:ident, $sql_type:expr, $getter:ident, $primitive:ident, $boxed:ident) => {
        paste::paste! {
            fn [<$prefix _from_native>](field: &FieldType, value: &SqlValue) -> Result<$ty> {
                match value {
                    SqlValue::$variant(v) => Ok(*v),
                    other => {
                        let wide = other.as_i64().ok_or_else(|| {
                            OrmLiteError::unexpected_arg(field.field_name(), stringify!($ty), other)
                        })?;
                        <$ty>::try_from(wide).map_err(|_| out_of_range(field, other, stringify!($ty)))
                    }
                }
            }

            fn [<$prefix _parse_default>](field: &FieldType, default_str: &str) -> Result<SqlValue> {
                parse_str::<$ty>(field, default_str, stringify!($ty)).map(SqlValue::$variant)
            }

            fn [<$prefix _java_to_sql_arg>](field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
                [<$prefix _from_native>](field, value).map(SqlValue::$variant)
            }

            fn [<$prefix _result_to_sql_arg>](
                _field: &FieldType,
                results: &dyn DatabaseResults,
                column_pos: usize,
            ) -> Result<SqlValue> {
                results.$getter(column_pos).map(SqlValue::$variant)
            }

            fn [<$prefix _sql_arg_to_java>](
                field: &FieldType,
                sql_arg: SqlValue,
                _column_pos: usize,
            ) -> Result<SqlValue> {
                [<$prefix _from_native>](field, &sql_arg).map(SqlValue::$variant)
            }

            fn [<$prefix _result_string_to_java>](
                field: &FieldType,
                value: &str,
                _column_pos: usize,
            ) -> Result<SqlValue> {
                parse_str::<$ty>(field, value, stringify!($ty)).map(SqlValue::$variant)
            }

            fn [<$prefix _convert_id_number>](number: i64) -> SqlValue {
                SqlValue::$variant(number as $ty)
            }

            fn [<$prefix _move_to_next_value>](current: &SqlValue) -> SqlValue {
                match current {
                    SqlValue::$variant(v) => SqlValue::$variant(v.wrapping_add(1)),
                    _ => SqlValue::$variant(1),
                }
            }

            static [<$prefix:upper _OPS>]: ConverterOps = ConverterOps {
                appropriate_id: true,
                valid_for_version: true,
                convert_id_number: Some([<$prefix _convert_id_number>]),
                move_to_next_value: Some([<$prefix _move_to_next_value>]),
                ..ConverterOps::base(
                    $sql_type,
                    [<$prefix _parse_default>],
                    [<$prefix _java_to_sql_arg>],
                    [<$prefix _result_to_sql_arg>],
                    [<$prefix _sql_arg_to_java>],
                    [<$prefix _result_string_to_java>],
                )
            };

            pub static $primitive: Persister = Persister {
                name: stringify!($primitive),
                primitive: true,
                ops: &[<$prefix:upper _OPS>],
            };

            pub static $boxed: Persister = Persister {
                name: stringify!($boxed),
                primitive: false,
                ops: &[<$prefix:upper _OPS>],
            };
        }
    };
}

macro_rules! floating_persister {
    ($prefix:ident, $ty:ty, $variant:ident, $sql_type:expr, $getter:ident, $primitive:ident, $boxed:ident) => {
        paste::paste! {
            fn [<$prefix _from_native>](field: &FieldType, value: &SqlValue) -> Result<$ty> {
                match value {
                    SqlValue::$variant(v) => Ok(*v),
                    other => other.as_f64().map(|v| v as $ty).ok_or_else(|| {
                        OrmLiteError::unexpected_arg(field.field_name(), stringify!($ty), other)
                    }),
                }
            }

            fn [<$prefix _parse_default>](field: &FieldType, default_str: &str) -> Result<SqlValue> {
                parse_str::<$ty>(field, default_str, stringify!($ty)).map(SqlValue::$variant)
            }

            fn [<$prefix _java_to_sql_arg>](field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
                [<$prefix _from_native>](field, value).map(SqlValue::$variant)
            }

            fn [<$prefix _result_to_sql_arg>](
                _field: &FieldType,
                results: &dyn DatabaseResults,
                column_pos: usize,
            ) -> Result<SqlValue> {
                results.$getter(column_pos).map(SqlValue::$variant)
            }

            fn [<$prefix _sql_arg_to_java>](
                field: &FieldType,
                sql_arg: SqlValue,
                _column_pos: usize,
            ) -> Result<SqlValue> {
                [<$prefix _from_native>](field, &sql_arg).map(SqlValue::$variant)
            }

            fn [<$prefix _result_string_to_java>](
                field: &FieldType,
                value: &str,
                _column_pos: usize,
            ) -> Result<SqlValue> {
                parse_str::<$ty>(field, value, stringify!($ty)).map(SqlValue::$variant)
            }

            static [<$prefix:upper _OPS>]: ConverterOps = ConverterOps::base(
                $sql_type,
                [<$prefix _parse_default>],
                [<$prefix _java_to_sql_arg>],
                [<$prefix _result_to_sql_arg>],
                [<$prefix _sql_arg_to_java>],
                [<$prefix _result_string_to_java>],
            );

            pub static $primitive: Persister = Persister {
                name: stringify!($primitive),
                primitive: true,
                ops: &[<$prefix:upper _OPS>],
            };

            pub static $boxed: Persister = Persister {
                name: stringify!($boxed),
                primitive: false,
                ops: &[<$prefix:upper _OPS>],
            };
        }
    };
}

integral_persister!(byte, i8, Byte, SqlType::Byte, get_byte, BYTE, BYTE_OBJ);
integral_persister!(short, i16, Short, SqlType::Short, get_short, SHORT, SHORT_OBJ);
integral_persister!(integer, i32, Int, SqlType::Integer, get_int, INTEGER, INTEGER_OBJ);
integral_persister!(long, i64, Long, SqlType::Long, get_long, LONG, LONG_OBJ);

floating_persister!(float, f32, Float, SqlType::Float, get_float, FLOAT, FLOAT_OBJ);
floating_persister!(double, f64, Double, SqlType::Double, get_double, DOUBLE, DOUBLE_OBJ);

#[cfg(test)]
mod tests {
    use crate::field::{DataType, FieldType};
    use crate::results::BufferedResults;
    use crate::value::SqlValue;
    use ormlite_types::{Dialect, SqlType};

    fn field(data_type: DataType) -> FieldType {
        FieldType::builder("value", data_type)
            .build(Dialect::PostgreSQL)
            .unwrap()
    }

    #[test]
    fn test_convert_id_number_truncates() {
        let byte = field(DataType::Byte);
        assert_eq!(byte.convert_id_number(257).unwrap(), SqlValue::Byte(1));
        assert_eq!(byte.convert_id_number(128).unwrap(), SqlValue::Byte(-128));

        let short = field(DataType::ShortObj);
        assert_eq!(short.convert_id_number(65_537).unwrap(), SqlValue::Short(1));

        let int = field(DataType::Integer);
        assert_eq!(
            int.convert_id_number(i64::from(i32::MAX) + 1).unwrap(),
            SqlValue::Int(i32::MIN)
        );

        let long = field(DataType::Long);
        assert_eq!(long.convert_id_number(-7).unwrap(), SqlValue::Long(-7));
    }

    #[test]
    fn test_floats_have_no_id_conversion() {
        let float = field(DataType::Float);
        assert!(float.convert_id_number(3).is_err());
    }

    #[test]
    fn test_integral_round_trip() {
        for (data_type, value) in [
            (DataType::Byte, SqlValue::Byte(i8::MIN)),
            (DataType::ShortObj, SqlValue::Short(i16::MAX)),
            (DataType::Integer, SqlValue::Int(-42)),
            (DataType::LongObj, SqlValue::Long(i64::MAX)),
        ] {
            let field = field(data_type);
            let converter = field.converter();
            let arg = converter.java_to_sql_arg(&field, &value).unwrap();
            assert_eq!(converter.sql_arg_to_java(&field, arg, 0).unwrap(), value);
        }
    }

    #[test]
    fn test_binding_widens_but_rejects_out_of_range() {
        let byte = field(DataType::Byte);
        let converter = byte.converter();
        assert_eq!(
            converter.java_to_sql_arg(&byte, &SqlValue::Long(12)).unwrap(),
            SqlValue::Byte(12)
        );
        assert!(converter.java_to_sql_arg(&byte, &SqlValue::Long(300)).is_err());
        assert!(
            converter
                .java_to_sql_arg(&byte, &SqlValue::Text("1".into()))
                .is_err()
        );
    }

    #[test]
    fn test_parse_default_rejects_non_numeric() {
        let int = field(DataType::Integer);
        let converter = int.converter();
        assert_eq!(
            converter.parse_default_string(&int, "17").unwrap(),
            SqlValue::Int(17)
        );
        assert!(matches!(
            converter.parse_default_string(&int, "seventeen"),
            Err(crate::error::OrmLiteError::Parse(_))
        ));
        assert!(converter.parse_default_string(&int, "99999999999").is_err());
    }

    #[test]
    fn test_float_precision_narrows() {
        let float = field(DataType::FloatObj);
        let converter = float.converter();
        let arg = converter
            .java_to_sql_arg(&float, &SqlValue::Double(0.1))
            .unwrap();
        assert_eq!(arg, SqlValue::Float(0.1_f32));
        assert_eq!(
            converter.sql_arg_to_java(&float, arg, 0).unwrap(),
            SqlValue::Float(0.1_f32)
        );
        assert_eq!(converter.sql_type(), SqlType::Float);
    }

    #[test]
    fn test_result_readers() {
        let results = BufferedResults::single_row([
            ("b", SqlValue::Long(7)),
            ("d", SqlValue::Double(2.5)),
        ]);
        let byte = field(DataType::Byte);
        assert_eq!(
            byte.converter().result_to_java(&byte, &results, 0).unwrap(),
            SqlValue::Byte(7)
        );
        let double = field(DataType::Double);
        assert_eq!(
            double
                .converter()
                .result_string_to_java(&double, "2.5", 1)
                .unwrap(),
            SqlValue::Double(2.5)
        );
    }

    #[test]
    fn test_version_increment_wraps() {
        let byte = field(DataType::Byte);
        assert_eq!(
            byte.move_to_next_value(&SqlValue::Byte(i8::MAX)).unwrap(),
            SqlValue::Byte(i8::MIN)
        );
        assert_eq!(
            byte.move_to_next_value(&SqlValue::Null).unwrap(),
            SqlValue::Byte(1)
        );
    }
}
