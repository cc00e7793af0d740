use crate::options::Options;
use crate::value::Value;

/// Whether `value` counts as absent and should be dropped by its parent.
///
/// | variant  | empty when                                        |
/// |----------|---------------------------------------------------|
/// | Null     | always                                            |
/// | String   | nothing left after trimming whitespace            |
/// | Number   | zero of any kind                                  |
/// | Bool     | `false` and [`Options::omit_false_booleans`] set  |
/// | Object   | no entries                                        |
/// | Array    | never                                             |
/// | Record   | never; records are converted before this is asked |
pub fn is_empty(value: &Value, options: &Options) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Number(n) => n.is_zero(),
        Value::Bool(b) => options.omit_false_booleans && !*b,
        Value::Object(entries) => entries.is_empty(),
        Value::Array(_) | Value::Record(_) => false,
    }
}
