//! Round-trip property: every value that coerces into a declared scalar
//! kind, rendered back to text, re-coerces to an equal value.
//!
//! `NaN` is excluded (it never compares equal to itself); every other
//! float round-trips because Rust formats floats with the shortest
//! representation that parses back to the same bits.

use conch_bind::{coerce_token, Value};
use conch_schema::Scalar;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn roundtrips(value: &Value, kind: Scalar) -> bool {
    coerce_token(&value.to_string(), kind).as_ref() == Some(value)
}

proptest! {
    #[test]
    fn bool_roundtrips(v: bool) {
        prop_assert!(roundtrips(&Value::Bool(v), Scalar::Bool));
    }

    #[test]
    fn integers_roundtrip(a: i8, b: u16, c: i32, d: u64, e: i64, f: isize, g: usize) {
        prop_assert!(roundtrips(&Value::I8(a), Scalar::I8));
        prop_assert!(roundtrips(&Value::U16(b), Scalar::U16));
        prop_assert!(roundtrips(&Value::I32(c), Scalar::I32));
        prop_assert!(roundtrips(&Value::U64(d), Scalar::U64));
        prop_assert!(roundtrips(&Value::I64(e), Scalar::I64));
        prop_assert!(roundtrips(&Value::Isize(f), Scalar::Isize));
        prop_assert!(roundtrips(&Value::Usize(g), Scalar::Usize));
    }

    #[test]
    fn floats_roundtrip(a in prop::num::f64::ANY.prop_filter("NaN", |v| !v.is_nan()),
                        b in prop::num::f32::ANY.prop_filter("NaN", |v| !v.is_nan())) {
        prop_assert!(roundtrips(&Value::F64(a), Scalar::F64));
        prop_assert!(roundtrips(&Value::F32(b), Scalar::F32));
    }

    #[test]
    fn decimals_roundtrip(mantissa: i64, scale in 0u32..=10) {
        let v = Value::Decimal(Decimal::new(mantissa, scale));
        prop_assert!(roundtrips(&v, Scalar::Decimal));
    }

    #[test]
    fn chars_roundtrip(c: char) {
        prop_assert!(roundtrips(&Value::Char(c), Scalar::Char));
    }

    #[test]
    fn strings_roundtrip(s in ".{0,40}") {
        prop_assert!(roundtrips(&Value::Str(s.clone()), Scalar::Str));
    }
}
