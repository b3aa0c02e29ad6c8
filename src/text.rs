//! Character-based string slicing helpers.
//!
//! These do not depend on the container algebra; they are boundary-adjacent
//! utilities with the same take/drop contract as the windowing operations,
//! counted in characters rather than bytes.

/// Character-based take/drop on string slices.
///
/// # Examples
///
/// ```rust
/// use argentum::text::Text;
///
/// assert_eq!("hello".take(3), "hel");
/// assert_eq!("hello".drop(3), "lo");
/// assert_eq!("héllo".take(2), "hé");
/// ```
pub trait Text {
    /// Returns the prefix of `min(length, characters)` characters.
    fn take(&self, length: usize) -> &str;

    /// Returns the suffix after skipping `min(length, characters)`
    /// characters.
    fn drop(&self, length: usize) -> &str;
}

impl Text for str {
    fn take(&self, length: usize) -> &str {
        self.char_indices()
            .nth(length)
            .map_or(self, |(byte_index, _)| &self[..byte_index])
    }

    fn drop(&self, length: usize) -> &str {
        self.char_indices()
            .nth(length)
            .map_or("", |(byte_index, _)| &self[byte_index..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", 0, "")]
    #[case("hello", 3, "hel")]
    #[case("hello", 5, "hello")]
    #[case("hello", 9, "hello")]
    #[case("", 3, "")]
    fn test_take(#[case] input: &str, #[case] length: usize, #[case] expected: &str) {
        assert_eq!(input.take(length), expected);
    }

    #[rstest]
    #[case("hello", 0, "hello")]
    #[case("hello", 3, "lo")]
    #[case("hello", 5, "")]
    #[case("hello", 9, "")]
    #[case("", 3, "")]
    fn test_drop(#[case] input: &str, #[case] length: usize, #[case] expected: &str) {
        assert_eq!(input.drop(length), expected);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!("héllo".take(2), "hé");
        assert_eq!("héllo".drop(2), "llo");
        assert_eq!("日本語".take(1), "日");
        assert_eq!("日本語".drop(2), "語");
    }

    #[test]
    fn test_take_and_drop_partition_the_string() {
        let input = "partition";
        for length in 0..=input.len() + 1 {
            let reassembled = format!("{}{}", input.take(length), input.drop(length));
            assert_eq!(reassembled, input);
        }
    }
}
