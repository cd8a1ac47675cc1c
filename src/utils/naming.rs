//! Operator display-name resolution.
//!
//! Operators are keyed by address; the tracker resolves some of them to
//! ENS names. Names are cosmetic only, so an unknown operator resolves to
//! its identifier unchanged.

use std::collections::BTreeMap;

/// Lookup table from operator address to ENS name
#[derive(Debug, Clone, Default)]
pub struct EnsNames {
    names: BTreeMap<String, String>,
}

impl EnsNames {
    pub fn new(names: BTreeMap<String, String>) -> Self {
        Self { names }
    }

    /// ENS name for an operator, if one is known and non-empty
    pub fn get(&self, operator: &str) -> Option<&str> {
        self.names
            .get(operator)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Plain-text label for an operator
    ///
    /// **Public** - passed as the naming function to the analyzers
    ///
    /// Known operators render as `name (0x123456...abcdef)`, unknown ones
    /// as the identifier itself.
    pub fn display_name(&self, operator: &str) -> String {
        match self.get(operator) {
            Some(name) => format!("{} ({})", name, shorten_address(operator)),
            None => operator.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Abbreviate an address to its first 8 and last 6 characters
///
/// Identifiers too short to abbreviate are returned as-is.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }

    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x1234567890abcdef1234567890abcdef12345678";

    fn names() -> EnsNames {
        let mut map = BTreeMap::new();
        map.insert(ADDR.to_string(), "alice.eth".to_string());
        map.insert("0xempty".to_string(), String::new());
        EnsNames::new(map)
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address(ADDR), "0x123456...345678");
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_display_name_known() {
        assert_eq!(names().display_name(ADDR), "alice.eth (0x123456...345678)");
    }

    #[test]
    fn test_display_name_unknown_is_identifier() {
        let other = "0xffffffffffffffffffffffffffffffffffffffff";
        assert_eq!(names().display_name(other), other);
    }

    #[test]
    fn test_empty_name_treated_as_unknown() {
        assert_eq!(names().display_name("0xempty"), "0xempty");
        assert!(names().get("0xempty").is_none());
    }
}
