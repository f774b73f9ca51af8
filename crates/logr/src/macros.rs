//! crates/logr/src/macros.rs
//! Convenience macros for building key-value lists and logging with them.

/// Build a flat key-value list from serializable expressions.
///
/// Every element is converted with [`to_value`](crate::to_value), so keys and
/// values may be any `Serialize` type. Keys that do not serialize to strings
/// are reported when the list is encoded.
///
/// # Example
/// ```
/// let pairs = logr::kv!["user", "alice", "attempts", 3];
/// assert_eq!(pairs.len(), 4);
/// assert_eq!(pairs[3], serde_json::json!(3));
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::to_value(&$item)),+]
    };
}

/// Log an informational message, building the key-value list only when the
/// logger is enabled.
///
/// The enabled check here only skips building the list; [`Logger::info`]
/// repeats it before writing.
///
/// [`Logger::info`]: crate::Logger::info
///
/// # Example
/// ```ignore
/// logr::info!(log.v(2), "cache refreshed", "entries", count);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $item:expr)* $(,)?) => {{
        let logger = &$logger;
        if $crate::Logger::enabled(logger) {
            $crate::Logger::info(logger, $msg, &$crate::kv![$($item),*]);
        }
    }};
}

/// Log an error with a message and key-value pairs.
///
/// # Example
/// ```ignore
/// logr::error!(log, err, "request failed", "status", 503);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $err:expr, $msg:expr $(, $item:expr)* $(,)?) => {{
        $crate::Logger::error(&$logger, &$err, $msg, &$crate::kv![$($item),*]);
    }};
}
