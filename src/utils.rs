use std::env::var;
use std::str::FromStr;

/// Get the value of ENV var, or a default
///
/// Only when:
/// - It is set
/// - It is not empty
pub fn env_var_or_else(var_name: &'static str, or_else: fn() -> String) -> String {
    if let Ok(value) = var(var_name) {
        if !value.is_empty() {
            return value;
        }
    }

    or_else()
}

/// Get the value of an ENV var parsed as `T`, or a default
///
/// Unset, empty and unparsable values all fall back to the default
pub fn env_var_parse_or<T: FromStr>(var_name: &'static str, default: T) -> T {
    if let Ok(value) = var(var_name) {
        if let Ok(parsed) = value.parse::<T>() {
            return parsed;
        }
    }

    default
}
