//! Typed field adders shared by `Context` and `Event`
//!
//! The implementing type provides `fn put_with(&mut self, key: &str, value: impl FnOnce() -> Value)`;
//! values are built lazily so disabled events do no serialization work.

macro_rules! field_adders {
    () => {
        /// Add a string field
        pub fn str(mut self, key: &str, value: impl Into<String>) -> Self {
            self.put_with(key, || ::serde_json::Value::String(value.into()));
            self
        }

        /// Add a signed integer field
        pub fn int(mut self, key: &str, value: i64) -> Self {
            self.put_with(key, || ::serde_json::Value::from(value));
            self
        }

        /// Add an unsigned integer field
        pub fn uint(mut self, key: &str, value: u64) -> Self {
            self.put_with(key, || ::serde_json::Value::from(value));
            self
        }

        /// Add a float field; non-finite values are written as `null`
        pub fn float(mut self, key: &str, value: f64) -> Self {
            self.put_with(key, || ::serde_json::Value::from(value));
            self
        }

        pub fn bool(mut self, key: &str, value: bool) -> Self {
            self.put_with(key, || ::serde_json::Value::Bool(value));
            self
        }

        /// Add an IP address field rendered as its textual literal
        pub fn ip(mut self, key: &str, value: ::std::net::IpAddr) -> Self {
            self.put_with(key, || ::serde_json::Value::String(value.to_string()));
            self
        }

        /// Add the error's display form under the `error` key
        pub fn err(mut self, err: &dyn ::std::error::Error) -> Self {
            self.put_with("error", || ::serde_json::Value::String(err.to_string()));
            self
        }

        /// Add any serializable value
        pub fn field<T: ::serde::Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
            self.put_with(key, || {
                ::serde_json::to_value(value)
                    .unwrap_or_else(|e| ::serde_json::Value::String(format!("!ERROR: {}", e)))
            });
            self
        }
    };
}

pub(crate) use field_adders;
