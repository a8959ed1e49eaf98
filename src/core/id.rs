//! Identifier generation

use uuid::Uuid;

/// Source of fresh resource identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 128-bit identifiers rendered as 32 lowercase hex characters
#[derive(Debug, Clone, Copy, Default)]
pub struct HexIdGenerator;

impl IdGenerator for HexIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_ids_are_32_lowercase_hex_chars() {
        let id = HexIdGenerator.next_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hex_ids_are_unique() {
        let generator = HexIdGenerator;
        assert_ne!(generator.next_id(), generator.next_id());
    }
}
