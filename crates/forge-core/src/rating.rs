use serde::{Deserialize, Deserializer, Serialize};

/// A 1..=5 score as used on every thesis axis.
///
/// Construction always clamps into range, including on wire decode: a server
/// that hands back `0` or `9` yields a usable thesis rather than a decode
/// failure. Rejecting (instead of clamping) out-of-range *user input* is the
/// job of draft validation, which operates on raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    /// Neutral default for a fresh form.
    pub const MIDPOINT: Self = Self(3);

    /// Clamp any integer into the 1..=5 scale.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(Self::MIN, Self::MAX);
        Self(u8::try_from(value).unwrap_or(3))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether a raw integer is already on the scale.
    #[must_use]
    pub const fn in_range(value: i64) -> bool {
        Self::MIN <= value && value <= Self::MAX
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(Self::clamped(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_below_scale() {
        assert_eq!(Rating::clamped(0).get(), 1);
        assert_eq!(Rating::clamped(-7).get(), 1);
    }

    #[test]
    fn clamps_above_scale() {
        assert_eq!(Rating::clamped(6).get(), 5);
        assert_eq!(Rating::clamped(i64::MAX).get(), 5);
    }

    #[test]
    fn in_range_values_pass_through() {
        for value in 1..=5 {
            assert_eq!(Rating::clamped(value).get(), u8::try_from(value).unwrap());
            assert!(Rating::in_range(value));
        }
        assert!(!Rating::in_range(0));
        assert!(!Rating::in_range(6));
    }

    #[test]
    fn default_is_midpoint() {
        assert_eq!(Rating::default().get(), 3);
    }

    #[test]
    fn deserializes_with_clamping() {
        let rating: Rating = serde_json::from_str("9").expect("number should decode");
        assert_eq!(rating.get(), 5);
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Rating::clamped(4)).expect("should encode");
        assert_eq!(json, "4");
    }
}
