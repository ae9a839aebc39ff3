use serde::{Deserialize, Serialize};

pub const DEFAULT_OPACITY_PERCENT: u8 = 50;
pub const MAX_OPACITY_PERCENT: u8 = 100;

/// Watermark opacity as a percentage in `0..=100`.
///
/// Out-of-range inputs are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opacity(u8);

impl Opacity {
    #[must_use]
    pub fn from_percent(percent: i64) -> Self {
        let clamped = percent.clamp(0, i64::from(MAX_OPACITY_PERCENT));
        Self(u8::try_from(clamped).unwrap_or(MAX_OPACITY_PERCENT))
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// `round(255 * percent / 100)`
    #[must_use]
    pub fn alpha(self) -> u8 {
        let scaled = (u32::from(self.0) * 255 * 2 + 100) / 200;
        u8::try_from(scaled).unwrap_or(u8::MAX)
    }

    /// Shadow alpha is a third of the text alpha, rounded down.
    #[must_use]
    pub fn shadow_alpha(self) -> u8 {
        self.alpha() / 3
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(DEFAULT_OPACITY_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 3)]
    #[case(2, 5)]
    #[case(50, 128)]
    #[case(99, 252)]
    #[case(100, 255)]
    fn alpha_is_rounded_percentage_of_255(#[case] percent: i64, #[case] alpha: u8) {
        assert_eq!(Opacity::from_percent(percent).alpha(), alpha);
    }

    #[test]
    fn shadow_alpha_is_floor_of_a_third() {
        assert_eq!(Opacity::from_percent(100).shadow_alpha(), 85);
        assert_eq!(Opacity::from_percent(50).shadow_alpha(), 42);
        assert_eq!(Opacity::from_percent(0).shadow_alpha(), 0);
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        assert_eq!(Opacity::from_percent(-20).percent(), 0);
        assert_eq!(Opacity::from_percent(250).percent(), 100);
        assert_eq!(Opacity::from_percent(i64::MAX).alpha(), 255);
    }

    #[test]
    fn default_is_half_opacity() {
        assert_eq!(Opacity::default().percent(), 50);
    }
}
