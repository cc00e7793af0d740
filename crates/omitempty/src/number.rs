use core::fmt;

/// Numeric leaf. The kind is kept so values round-trip through serializers
/// unchanged; emptiness only looks at whether the value is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Zero of any kind, including `-0.0`. NaN is not zero.
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::I64(i) => i == 0,
            Number::U64(u) => u == 0,
            Number::F64(f) => f == 0.0,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
            Number::F64(f) => f,
        }
    }
}

/// Floats print the way `serde_json` prints them (shortest round-trip form
/// via ryu, e.g. `1e16`, `1.0`). Map keys built from numbers use this.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(num) if num.is_finite() => {
                let mut buf = ryu::Buffer::new();
                f.write_str(buf.format_finite(*num))
            }
            Number::F64(_) => f.write_str("null"),
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::I64(v as i64)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::U64(v as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::F64(v as f64)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::F64(v)
    }
}
