//! Total ordering over JSON values
//!
//! Every driver and the reference join compare column values through this
//! single ordering, so the fast paths and the nested-loop oracle can never
//! disagree on a comparison.
//!
//! Ordering rules:
//! - Type rank first: null < bool < number < string < array < object
//! - Within a rank, natural ordering
//! - Numbers compare numerically across integer/float representations
//! - Arrays and objects compare equal within their rank (not coerced,
//!   not ordered)

use std::cmp::Ordering;

use serde_json::Value;

/// Rank used to order values of different JSON types.
fn type_order(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Compares two JSON values under the crate-wide total order.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    let a_type = type_order(a);
    let b_type = type_order(b);

    if a_type != b_type {
        return a_type.cmp(&b_type);
    }

    // Same type, compare values
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
        (Value::Number(a_n), Value::Number(b_n)) => {
            // Exact when both sides are integers; total_cmp keeps the
            // order total when floats are involved.
            if let (Some(a_i), Some(b_i)) = (a_n.as_i64(), b_n.as_i64()) {
                return a_i.cmp(&b_i);
            }
            let a_f = a_n.as_f64().unwrap_or(0.0);
            let b_f = b_n.as_f64().unwrap_or(0.0);
            a_f.total_cmp(&b_f)
        }
        (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
        _ => Ordering::Equal, // Arrays and objects not compared
    }
}
