//! Wire tag mapping tests

use strata_types::{
    Error, Type, WireTag, BLOB, BOOLEAN, DATE, FLOAT32, FLOAT64, INT16, INT32, INT64, INT8, JSON,
    NULL, TEXT, TIMESTAMP, UINT16, UINT32, UINT64, UINT8,
};

#[test]
fn test_scalar_types_round_trip_through_tags() {
    for t in [
        NULL, INT8, UINT8, INT16, UINT16, INT32, UINT32, INT64, UINT64, FLOAT32, FLOAT64,
        TIMESTAMP, DATE, TEXT, BOOLEAN, BLOB, JSON,
    ] {
        assert_eq!(Type::from_wire_tag(t.wire_tag()).unwrap(), t, "{}", t);
    }
}

#[test]
fn test_tag_codes() {
    assert_eq!(INT64.wire_tag().code(), 265);
    assert_eq!(TEXT.wire_tag().code(), 6163);
    assert_eq!(JSON.wire_tag().code(), 2078);
    assert_eq!(WireTag::try_from(10260).unwrap(), WireTag::Blob);
    assert_eq!(
        WireTag::try_from(-1).unwrap_err(),
        Error::TypeNotSupported("-1".into())
    );
}

#[test]
fn test_unmapped_tags() {
    for tag in [
        WireTag::Int24,
        WireTag::Decimal,
        WireTag::Time,
        WireTag::Datetime,
        WireTag::Year,
        WireTag::Char,
        WireTag::VarBinary,
        WireTag::Enum,
        WireTag::Geometry,
        WireTag::Tuple,
        WireTag::Expression,
    ] {
        assert_eq!(
            Type::from_wire_tag(tag).unwrap_err(),
            Error::TypeNotSupported(tag.to_string())
        );
        assert_eq!(tag.display_name(), "UNKNOWN");
    }
    assert_eq!(Type::from_wire_tag(WireTag::VarChar).unwrap(), TEXT);
}
