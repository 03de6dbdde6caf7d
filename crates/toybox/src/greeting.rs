//! Templated greetings.

/// Greeting template; `{name}` is replaced verbatim.
pub const GREETING_TEMPLATE: &str = "Hello, {name}!";

pub fn greet(name: &str) -> String {
    GREETING_TEMPLATE.replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("Ada"), "Hello, Ada!");
    }

    #[test]
    fn test_greet_empty_name() {
        assert_eq!(greet(""), "Hello, !");
    }

    #[test]
    fn test_greet_unicode_and_braces() {
        assert_eq!(greet("日本語"), "Hello, 日本語!");
        assert_eq!(greet("{name}"), "Hello, {name}!");
    }
}
