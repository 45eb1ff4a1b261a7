/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys must be string literals; nested objects and arrays recurse, and
/// any other token is converted through [`to_value`](crate::to_value).
///
/// ```rust
/// use minemizer::{value, Value};
///
/// let record = value!({
///     "name": "Alice",
///     "tags": ["admin", "dev"],
///     "manager": null
/// });
/// let object = record.as_object().unwrap();
/// assert_eq!(object.get("manager"), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // any other expression goes through serde
    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}
