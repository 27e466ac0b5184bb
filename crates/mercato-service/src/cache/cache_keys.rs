//! Cache key generators for consistent key naming.

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "mercato:cache";

/// Key under which the full product listing is cached.
///
/// Single-item product reads bypass the cache, so this is the only product
/// key; every successful product write invalidates it.
#[must_use]
pub fn all_products() -> String {
    format!("{}:products:all", CACHE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_products_key() {
        assert_eq!(all_products(), "mercato:cache:products:all");
    }
}
