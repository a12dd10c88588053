// ABOUTME: Custom filter functions for template rendering
// ABOUTME: Implements the closed filter set applied via the pipe syntax

use minijinja::value::Value;
use minijinja::{Environment, Error, ErrorKind};

/// Register all built-in filters on an environment
pub fn register_filters(env: &mut Environment) {
    env.add_filter("dump", dump_filter);
}

/// Serialize any value (object, list, number, string) to compact JSON text.
/// `${{ itemList | dump }}` with `["first","second","third"]` renders the
/// literal text `["first","second","third"]`.
pub fn dump_filter(value: Value) -> Result<String, Error> {
    serde_json::to_string(&value).map_err(|err| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("dump filter could not serialize value: {err}"),
        )
    })
}
