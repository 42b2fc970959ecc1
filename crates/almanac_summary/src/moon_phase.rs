//! Qualitative moon phase from the illuminated percentage.

use std::fmt::{Display, Formatter};

/// One of the eight conventional phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl Display for MoonPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase name for an illumination percentage.
///
/// Thresholds are tested in order and the first match wins:
///
/// | condition      | phase           |
/// |----------------|-----------------|
/// | `< 1`          | New Moon        |
/// | `< 49`         | Waxing Crescent |
/// | `< 51`         | First Quarter   |
/// | `< 99`         | Waxing Gibbous  |
/// | `<= 100`       | Full Moon       |
/// | `> 99`         | Waning Gibbous  |
/// | `> 51`         | Last Quarter    |
/// | otherwise      | Waning Crescent |
///
/// Illumination alone cannot tell waxing from waning, so every input in
/// `[0, 100]` lands on one of the first five names. Values above 100 give
/// Waning Gibbous; only NaN falls through to Waning Crescent. The input is
/// neither validated nor clamped.
pub fn classify_illumination(phase: f64) -> MoonPhase {
    if phase < 1.0 {
        MoonPhase::NewMoon
    } else if phase < 49.0 {
        MoonPhase::WaxingCrescent
    } else if phase < 51.0 {
        MoonPhase::FirstQuarter
    } else if phase < 99.0 {
        MoonPhase::WaxingGibbous
    } else if phase <= 100.0 {
        MoonPhase::FullMoon
    } else if phase > 99.0 {
        MoonPhase::WaningGibbous
    } else if phase > 51.0 {
        MoonPhase::LastQuarter
    } else {
        MoonPhase::WaningCrescent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        let cases = [
            (0.0, MoonPhase::NewMoon),
            (0.5, MoonPhase::NewMoon),
            (0.999_999, MoonPhase::NewMoon),
            (1.0, MoonPhase::WaxingCrescent),
            (25.0, MoonPhase::WaxingCrescent),
            (48.999, MoonPhase::WaxingCrescent),
            (49.0, MoonPhase::FirstQuarter),
            (50.0, MoonPhase::FirstQuarter),
            (50.999, MoonPhase::FirstQuarter),
            (51.0, MoonPhase::WaxingGibbous),
            (75.0, MoonPhase::WaxingGibbous),
            (98.999, MoonPhase::WaxingGibbous),
            (99.0, MoonPhase::FullMoon),
            (99.5, MoonPhase::FullMoon),
            (100.0, MoonPhase::FullMoon),
        ];
        for (pct, expected) in cases {
            assert_eq!(classify_illumination(pct), expected, "pct = {pct}");
        }
    }

    #[test]
    fn out_of_range_inputs() {
        assert_eq!(classify_illumination(-5.0), MoonPhase::NewMoon);
        assert_eq!(classify_illumination(f64::NEG_INFINITY), MoonPhase::NewMoon);
        assert_eq!(classify_illumination(100.000_1), MoonPhase::WaningGibbous);
        assert_eq!(classify_illumination(150.0), MoonPhase::WaningGibbous);
        assert_eq!(classify_illumination(f64::INFINITY), MoonPhase::WaningGibbous);
    }

    #[test]
    fn nan_is_waning_crescent() {
        assert_eq!(classify_illumination(f64::NAN), MoonPhase::WaningCrescent);
    }

    #[test]
    fn last_quarter_unreachable() {
        let mut pct = -10.0;
        while pct <= 200.0 {
            let phase = classify_illumination(pct);
            assert_ne!(phase, MoonPhase::LastQuarter, "pct = {pct}");
            assert_ne!(phase, MoonPhase::WaningCrescent, "pct = {pct}");
            pct += 0.125;
        }
    }

    #[test]
    fn in_range_inputs_use_first_five_labels() {
        let waxing_side = [
            MoonPhase::NewMoon,
            MoonPhase::WaxingCrescent,
            MoonPhase::FirstQuarter,
            MoonPhase::WaxingGibbous,
            MoonPhase::FullMoon,
        ];
        for k in 0..=1000 {
            let pct = k as f64 / 10.0;
            assert!(waxing_side.contains(&classify_illumination(pct)));
        }
    }

    #[test]
    fn monotone_over_valid_range() {
        let order = |p: MoonPhase| p as u8;
        let mut prev = order(classify_illumination(0.0));
        for k in 1..=1000 {
            let cur = order(classify_illumination(k as f64 / 10.0));
            assert!(cur >= prev);
            prev = cur;
        }
    }

    #[test]
    fn labels() {
        assert_eq!(MoonPhase::FirstQuarter.to_string(), "First Quarter");
        assert_eq!(MoonPhase::WaningCrescent.label(), "Waning Crescent");
    }
}
