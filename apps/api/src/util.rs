//! Small shared helpers: stable hashing for deterministic picks, id slugs.

/// FNV-1a over the input bytes. Used wherever a pick must be deterministic
/// for a given name across process restarts (subject lines, CTAs, demo
/// profile fallback) — `std::hash` is randomly seeded and won't do.
pub fn stable_hash(input: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Lowercases and replaces whitespace runs with underscores.
/// Profile ids are `slug(name)_slug(company)` when no email is known.
pub fn slugify(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_hash_is_deterministic() {
        assert_eq!(stable_hash("John Doe"), stable_hash("John Doe"));
        assert_ne!(stable_hash("John Doe"), stable_hash("Jane Doe"));
    }

    #[test]
    fn test_stable_hash_empty_is_offset_basis() {
        assert_eq!(stable_hash(""), 0xcbf2_9ce4_8422_2325);
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  John   Doe "), "john_doe");
        assert_eq!(slugify("TechCorp Inc"), "techcorp_inc");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }
}
