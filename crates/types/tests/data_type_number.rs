//! Integer and float type tests

mod common;

use chrono::{TimeZone, Utc};
use common::assert_total_order;
use std::cmp::Ordering;
use strata_types::{
    Error, Value, WireTag, FLOAT32, FLOAT64, INT16, INT32, INT64, INT8, UINT16, UINT32, UINT64,
    UINT8,
};

#[test]
fn test_convert_integer_inputs() {
    assert_eq!(INT64.convert(&Value::I8(-5)).unwrap(), Value::I64(-5));
    assert_eq!(INT32.convert(&Value::U16(40000)).unwrap(), Value::I32(40000));
    assert_eq!(UINT32.convert(&Value::I64(7)).unwrap(), Value::U32(7));
    assert_eq!(UINT64.convert(&Value::U64(u64::MAX)).unwrap(), Value::U64(u64::MAX));
    assert_eq!(INT16.convert(&Value::I64(-32768)).unwrap(), Value::I16(-32768));
    assert_eq!(UINT8.convert(&Value::I64(255)).unwrap(), Value::U8(255));
}

#[test]
fn test_convert_coercions() {
    // Floats truncate toward zero
    assert_eq!(INT64.convert(&Value::F64(2.9)).unwrap(), Value::I64(2));
    assert_eq!(INT64.convert(&Value::F64(-2.9)).unwrap(), Value::I64(-2));

    // Booleans are 0 and 1, NULL is 0
    assert_eq!(INT32.convert(&Value::Bool(true)).unwrap(), Value::I32(1));
    assert_eq!(UINT64.convert(&Value::Null).unwrap(), Value::U64(0));

    // Numeric strings
    assert_eq!(INT64.convert(&Value::string("-42")).unwrap(), Value::I64(-42));
    assert_eq!(INT64.convert(&Value::string("0x10")).unwrap(), Value::I64(16));
    assert_eq!(UINT32.convert(&Value::string("0b11")).unwrap(), Value::U32(3));
    assert_eq!(FLOAT64.convert(&Value::string("2.5")).unwrap(), Value::F64(2.5));
    assert_eq!(FLOAT32.convert(&Value::string("0.1")).unwrap(), Value::F32(0.1));
    assert_eq!(FLOAT64.convert(&Value::I64(3)).unwrap(), Value::F64(3.0));
}

#[test]
fn test_convert_timestamp_to_epoch_seconds() {
    let ts = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        INT64.convert(&Value::Timestamp(ts)).unwrap(),
        Value::I64(1_577_836_800)
    );
    assert!(matches!(
        INT16.convert(&Value::Timestamp(ts)),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_convert_rejects() {
    assert!(matches!(INT64.convert(&Value::string("abc")), Err(Error::InvalidType(_))));
    assert!(matches!(INT64.convert(&Value::string("1.5")), Err(Error::InvalidType(_))));
    assert!(matches!(FLOAT64.convert(&Value::bytes(vec![1])), Err(Error::InvalidType(_))));
    assert!(matches!(INT32.convert(&Value::list(vec![])), Err(Error::InvalidType(_))));
}

#[test]
fn test_convert_out_of_range() {
    assert_eq!(
        INT8.convert(&Value::I64(-129)).unwrap_err(),
        Error::OutOfRange {
            value: "-129".into(),
            target: "INT8".into()
        }
    );
    assert!(matches!(UINT32.convert(&Value::I64(-1)), Err(Error::OutOfRange { .. })));
    assert!(matches!(UINT16.convert(&Value::I64(65536)), Err(Error::OutOfRange { .. })));
    assert!(matches!(INT64.convert(&Value::U64(u64::MAX)), Err(Error::OutOfRange { .. })));
    assert!(matches!(INT32.convert(&Value::F64(1e12)), Err(Error::OutOfRange { .. })));
}

#[test]
fn test_compare_small_widths_take_signed_path() {
    assert_eq!(
        INT16.compare(&Value::I16(5), &Value::I16(3)).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        UINT16.compare(&Value::U16(5), &Value::U16(3)).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        UINT8.compare(&Value::U8(200), &Value::U8(100)).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_compare_unsigned_beyond_signed_range() {
    let big = Value::U64(u64::MAX);
    let small = Value::U64(1);
    assert_eq!(UINT64.compare(&big, &small).unwrap(), Ordering::Greater);
    assert_eq!(UINT64.compare(&small, &big).unwrap(), Ordering::Less);
    assert_eq!(UINT64.compare(&big, &big).unwrap(), Ordering::Equal);
}

#[test]
fn test_compare_floats_truncate_to_integers() {
    assert_eq!(
        FLOAT64.compare(&Value::F64(1.5), &Value::F64(1.25)).unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        FLOAT32.compare(&Value::F32(-0.5), &Value::F32(0.25)).unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        FLOAT64.compare(&Value::F64(2.9), &Value::F64(1.1)).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        FLOAT64.compare(&Value::F64(-2.5), &Value::F64(1.5)).unwrap(),
        Ordering::Less
    );
    assert!(matches!(
        FLOAT64.compare(&Value::F64(f64::NAN), &Value::F64(0.0)),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_compare_total_order() {
    let values: Vec<Value> = [-10, -1, 0, 3, 99].into_iter().map(Value::I64).collect();
    assert_total_order(&INT64, &values);

    let values: Vec<Value> = [0, 1, u64::MAX / 2, u64::MAX]
        .into_iter()
        .map(Value::U64)
        .collect();
    assert_total_order(&UINT64, &values);

    let values: Vec<Value> = [-2.5, -0.5, 0.25, 1.25, 1.5, 3.0]
        .into_iter()
        .map(Value::F64)
        .collect();
    assert_total_order(&FLOAT64, &values);
}

#[test]
fn test_convert_is_idempotent() {
    let cases = [
        (INT8, Value::string("-8")),
        (UINT8, Value::F64(7.7)),
        (INT16, Value::Bool(true)),
        (UINT16, Value::I64(300)),
        (INT32, Value::string("0x7f")),
        (UINT32, Value::I8(9)),
        (INT64, Value::Null),
        (UINT64, Value::string("18446744073709551615")),
        (FLOAT32, Value::string("1.25")),
        (FLOAT64, Value::I64(-3)),
    ];
    for (t, input) in cases {
        let once = t.convert(&input).unwrap();
        assert_eq!(t.convert(&once).unwrap(), once, "{}", t);
        assert_eq!(t.compare(&once, &once).unwrap(), Ordering::Equal, "{}", t);
    }
}

#[test]
fn test_to_wire() {
    let wire = INT64.to_wire(&Value::string("-12")).unwrap();
    assert_eq!(wire.tag(), WireTag::Int64);
    assert_eq!(wire.raw(), b"-12");

    let wire = UINT8.to_wire(&Value::I64(200)).unwrap();
    assert_eq!(wire.tag(), WireTag::Uint8);
    assert_eq!(wire.raw(), b"200");

    assert_eq!(FLOAT64.to_wire(&Value::F64(0.5)).unwrap().raw(), b"0.5");
    assert_eq!(FLOAT64.to_wire(&Value::F64(2.0)).unwrap().raw(), b"2");
    assert_eq!(FLOAT32.to_wire(&Value::F32(0.1)).unwrap().raw(), b"0.1");

    assert!(INT64.to_wire(&Value::Null).unwrap().is_null());
    assert!(INT8.to_wire(&Value::I64(1000)).is_err());
}

#[test]
fn test_mysql_type_names() {
    let names = [
        (INT8, "TINYINT"),
        (UINT8, "TINYINT UNSIGNED"),
        (INT16, "SMALLINT"),
        (UINT16, "SMALLINT UNSIGNED"),
        (INT32, "INTEGER"),
        (UINT32, "INTEGER UNSIGNED"),
        (INT64, "BIGINT"),
        (UINT64, "BIGINT UNSIGNED"),
        (FLOAT32, "FLOAT"),
        (FLOAT64, "DOUBLE"),
    ];
    for (t, name) in names {
        assert_eq!(t.mysql_type_name(), name);
    }
}
