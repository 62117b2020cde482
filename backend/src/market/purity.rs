//! Unit and fineness arithmetic.
//!
//! Providers quote per fine troy ounce; the feed works per gram at full
//! purity and derives alloy grades by exact parts-per-24 ratios.

/// Grams in one troy ounce.
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Converts a per-troy-ounce price into a per-gram price.
pub fn ounce_to_gram(price_per_ounce: f64) -> f64 {
    price_per_ounce / TROY_OUNCE_GRAMS
}

/// Alloy fineness in parts per 24.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Karat {
    K24,
    K21,
    K18,
}

impl Karat {
    pub fn parts(self) -> u8 {
        match self {
            Karat::K24 => 24,
            Karat::K21 => 21,
            Karat::K18 => 18,
        }
    }

    /// Fraction of pure metal: 1.0, 0.875, 0.75 (all exact in binary).
    pub fn ratio(self) -> f64 {
        f64::from(self.parts()) / 24.0
    }

    /// Price of this grade given the full-purity price.
    pub fn price_from_fine(self, fine_price: f64) -> f64 {
        fine_price * self.ratio()
    }
}

/// Two-decimal transport representation. Only call at the edge.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ratios_are_exact() {
        assert_eq!(Karat::K24.ratio(), 1.0);
        assert_eq!(Karat::K21.ratio(), 0.875);
        assert_eq!(Karat::K18.ratio(), 0.75);
    }

    #[test]
    fn ounce_spot_converts_to_gram() {
        let gram = ounce_to_gram(3100.00);
        assert_eq!(gram, 3100.00 / 31.1035);
        assert!((gram - 99.6672).abs() < 1e-4, "got {gram}");
        assert_eq!(format_price(gram), "99.67");
    }

    #[test]
    fn formatting_keeps_two_decimals() {
        assert_eq!(format_price(4150.0), "4150.00");
        assert_eq!(format_price(3631.256), "3631.26");
        assert_eq!(format_price(0.1), "0.10");
    }

    proptest! {
        #[test]
        fn grades_track_fine_price(fine in 0.01f64..1_000_000.0) {
            let k21 = Karat::K21.price_from_fine(fine);
            let k18 = Karat::K18.price_from_fine(fine);

            prop_assert_eq!(k21, fine * 0.875);
            prop_assert_eq!(k18, fine * 0.75);
            prop_assert!(k18 < k21 && k21 < fine);
        }
    }
}
