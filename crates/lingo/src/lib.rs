pub mod catalog;
pub mod template;
pub mod types;

mod locale;
mod resolver;

#[cfg(feature = "global-locale")]
mod global;

pub use catalog::{Bundle, Catalog, LoadError, LoadWarning, compute_suggestions};
pub use locale::{ActiveLocale, DEFAULT_LOCALE};
pub use resolver::Resolver;
pub use types::{MessageNode, Value, Values};

#[cfg(feature = "global-locale")]
pub use global::{install_catalog, locale, resolve, set_locale, with_resolver};

/// Creates a [`Values`] map from name/value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or `Option`s (where `None` becomes
/// `Value::Null`) directly.
///
/// # Example
///
/// ```
/// use lingo::{values, Value};
///
/// let v = values! { "count" => 3, "window" => "09:00" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["window"].as_string(), Some("09:00"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        $crate::Values::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Values::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
