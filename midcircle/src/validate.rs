use std::fmt::Debug;

use crate::error::CoordError;
use crate::point::Point;

const PAIR_EXPECTED: &str = "contain two integers";
const SCALAR_EXPECTED: &str = "be an integer";
const RADIUS_RANGE_EXPECTED: &str = "be an integer between -3037000499 and 3037000499";

/// Largest radius magnitude whose square fits in an `i64`.
pub const MAX_RADIUS: i64 = 3_037_000_499;

/// A value that converts to an `i64` without loss.
///
/// Integers convert when they fit, floats only when finite and integral,
/// booleans as 0/1, and strings when they parse as a base-10 integer
/// (surrounding whitespace, an optional sign, and single underscores between
/// digits are accepted).
pub trait IntegerLike {
    fn to_integer(&self) -> Option<i64>;
}

macro_rules! integer_like_int {
    ($($t:ty),*) => {
        $(
            impl IntegerLike for $t {
                fn to_integer(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

integer_like_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntegerLike for bool {
    fn to_integer(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl IntegerLike for f64 {
    fn to_integer(&self) -> Option<i64> {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if self.is_finite()
            && self.fract() == 0.0
            && *self >= i64::MIN as f64
            && *self < i64::MAX as f64
        {
            Some(*self as i64)
        } else {
            None
        }
    }
}

impl IntegerLike for f32 {
    fn to_integer(&self) -> Option<i64> {
        f64::from(*self).to_integer()
    }
}

impl IntegerLike for str {
    fn to_integer(&self) -> Option<i64> {
        parse_integer(self)
    }
}

impl IntegerLike for String {
    fn to_integer(&self) -> Option<i64> {
        parse_integer(self)
    }
}

impl<T: IntegerLike + ?Sized> IntegerLike for &T {
    fn to_integer(&self) -> Option<i64> {
        (**self).to_integer()
    }
}

#[cfg(feature = "serde")]
impl IntegerLike for toml::Value {
    fn to_integer(&self) -> Option<i64> {
        match self {
            toml::Value::Integer(i) => Some(*i),
            toml::Value::Float(f) => f.to_integer(),
            toml::Value::String(s) => parse_integer(s),
            toml::Value::Boolean(b) => b.to_integer(),
            _ => None,
        }
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }
    if digits.contains("__") || !digits.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return None;
    }
    let sign = &text[..text.len() - digits.len()];
    let mut cleaned = String::with_capacity(text.len());
    cleaned.push_str(sign);
    cleaned.extend(digits.chars().filter(|&c| c != '_'));
    cleaned.parse().ok()
}

/// True if `arg` converts to an integer without loss.
pub fn is_integer<T: IntegerLike + ?Sized>(arg: &T) -> bool {
    arg.to_integer().is_some()
}

/// Validate a two-item coordinate and convert it to a [`Point`].
///
/// The arity check only probes the length: an item equal to zero is as
/// valid as any other integer.
pub fn validate_pair<T: IntegerLike + Debug>(
    field: &'static str,
    items: &[T],
) -> Result<Point, CoordError> {
    check_pair(field, items, || describe_items(items))
}

/// Validate a scalar radius.
///
/// Integers outside `-MAX_RADIUS..=MAX_RADIUS` are rejected: their square
/// does not fit in an `i64`.
pub fn validate_radius<T: IntegerLike + Debug + ?Sized>(radius: &T) -> Result<i64, CoordError> {
    check_radius(radius.to_integer(), || format!("{radius:?}"))
}

/// Parse a coordinate written as text, e.g. `"50,50"`, `"(50, 50)"` or
/// `"[-3, 4]"`.
pub fn parse_pair(field: &'static str, text: &str) -> Result<Point, CoordError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
        .unwrap_or(trimmed);

    let items: Vec<&str> = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };
    check_pair(field, &items, || text.to_string())
}

/// Parse a radius written as text.
pub fn parse_radius(text: &str) -> Result<i64, CoordError> {
    validate_radius(text)
}

/// Validate a coordinate taken from a TOML document.
#[cfg(feature = "serde")]
pub fn validate_toml_pair(field: &'static str, value: &toml::Value) -> Result<Point, CoordError> {
    match value {
        toml::Value::Array(items) => check_pair(field, items, || value.to_string()),
        other => Err(CoordError::Shape {
            field,
            value: other.to_string(),
        }),
    }
}

/// Validate a radius taken from a TOML document.
#[cfg(feature = "serde")]
pub fn validate_toml_radius(value: &toml::Value) -> Result<i64, CoordError> {
    check_radius(value.to_integer(), || value.to_string())
}

fn check_radius(radius: Option<i64>, describe: impl Fn() -> String) -> Result<i64, CoordError> {
    match radius {
        Some(r) if (-MAX_RADIUS..=MAX_RADIUS).contains(&r) => Ok(r),
        Some(_) => Err(CoordError::Value {
            field: "radius",
            expected: RADIUS_RANGE_EXPECTED,
            value: describe(),
        }),
        None => Err(CoordError::Value {
            field: "radius",
            expected: SCALAR_EXPECTED,
            value: describe(),
        }),
    }
}

fn check_pair<T: IntegerLike>(
    field: &'static str,
    items: &[T],
    describe: impl Fn() -> String,
) -> Result<Point, CoordError> {
    let [first, second] = items else {
        return Err(CoordError::Shape {
            field,
            value: describe(),
        });
    };
    match (first.to_integer(), second.to_integer()) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(CoordError::Value {
            field,
            expected: PAIR_EXPECTED,
            value: describe(),
        }),
    }
}

fn describe_items<T: Debug>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| format!("{item:?}")).collect();
    format!("({})", parts.join(", "))
}
