//! Greeting used by the `utilkit` binary.

/// `"Hello, {name}!"`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
