//! Functions with no behavior worth speaking of, kept around as the first
//! thing to write assertions against before moving on to the classifier.

/// Greets `name`, or the whole world when no name is given
pub fn simple_func(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or("World"))
}

/// Returns `true`
pub fn return_true() -> bool {
    true
}

/// Returns `false`
pub fn return_false() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_greeting() {
        let result = simple_func(None);
        let expect_to_be = "Hello, World!";
        assert_eq!(result, expect_to_be);
    }

    #[test]
    fn custom_name() {
        assert_eq!(simple_func(Some("Bob")), "Hello, Bob!");
    }

    #[test]
    fn booleans() {
        assert!(return_true());
        assert!(!return_false());
    }
}
