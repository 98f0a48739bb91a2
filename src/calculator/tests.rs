//! Unit tests for the calculator module

use super::*;
use crate::color::BandColor::{self, *};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

const TOLERANCE_COLORS: [BandColor; 8] = [Brown, Red, Green, Blue, Violet, Grey, Silver, Gold];
const TEMP_COLORS: [BandColor; 7] = [Brown, Red, Orange, Yellow, Blue, Violet, White];

#[test]
fn test_four_band_brown_black_red_gold() {
    let r = calculate_colors(&[Brown, Black, Red, Gold]).unwrap();
    assert!(approx_eq(r.resistance, 1000.0), "got {}", r.resistance);
    assert!(approx_eq(r.tolerance, 50.0), "got {}", r.tolerance);
    assert_eq!(r.temp_coefficient, None);
}

#[test]
fn test_five_band_yellow_violet_black_gold_brown() {
    let r = calculate_colors(&[Yellow, Violet, Black, Gold, Brown]).unwrap();
    assert!(approx_eq(r.resistance, 4.7), "got {}", r.resistance);
    assert!(approx_eq(r.tolerance, 0.047), "got {}", r.tolerance);
}

#[test]
fn test_five_band_black_multiplier() {
    let r = calculate_colors(&[Yellow, Violet, Black, Black, Brown]).unwrap();
    assert!(approx_eq(r.resistance, 470.0), "got {}", r.resistance);
    assert!(approx_eq(r.tolerance, 4.7), "got {}", r.tolerance);
}

#[test]
fn test_six_band_uses_three_digits_and_temp_coefficient() {
    let r = calculate_colors(&[Red, Violet, Green, Orange, Blue, Red]).unwrap();
    assert!(approx_eq(r.resistance, 275_000.0), "got {}", r.resistance);
    assert!(approx_eq(r.tolerance, 687.5), "got {}", r.tolerance);
    assert_eq!(r.temp_coefficient, Some(50));
}

#[test]
fn test_silver_and_gold_multipliers() {
    let silver = calculate_colors(&[Green, Blue, Silver, Gold]).unwrap();
    assert!(approx_eq(silver.resistance, 5.6), "got {}", silver.resistance);

    let gold = calculate_colors(&[Green, Blue, Gold, Gold]).unwrap();
    assert!(approx_eq(gold.resistance, 0.56), "got {}", gold.resistance);
}

#[test]
fn test_power_of_ten_multipliers() {
    for color in BandColor::ALL.into_iter().take(10) {
        let r = calculate_colors(&[Brown, Black, color, Brown]).unwrap();
        let expected = 10.0 * 10f64.powi(color.code() as i32);
        assert!(
            approx_eq(r.resistance, expected),
            "{}: expected {}, got {}",
            color,
            expected,
            r.resistance
        );
    }
}

#[test]
fn test_tolerance_applies_to_computed_resistance() {
    let r = calculate_colors(&[Brown, Black, Orange, Silver]).unwrap();
    assert!(approx_eq(r.resistance, 10_000.0));
    assert!(approx_eq(r.tolerance, 1_000.0), "got {}", r.tolerance);
    assert!(approx_eq(r.min(), 9_000.0));
    assert!(approx_eq(r.max(), 11_000.0));
}

#[test]
fn test_tolerance_table() {
    let expected = [
        (Brown, 0.01),
        (Red, 0.02),
        (Green, 0.005),
        (Blue, 0.0025),
        (Violet, 0.001),
        (Grey, 0.0005),
        (Silver, 0.1),
        (Gold, 0.05),
    ];
    for (color, fraction) in expected {
        let r = calculate_colors(&[Brown, Black, Black, color]).unwrap();
        assert!(
            approx_eq(r.tolerance, 10.0 * fraction),
            "{}: got {}",
            color,
            r.tolerance
        );
    }
}

#[test]
fn test_temp_coefficient_table() {
    let expected = [
        (Brown, 100),
        (Red, 50),
        (Orange, 15),
        (Yellow, 25),
        (Blue, 10),
        (Violet, 5),
        (White, 1),
    ];
    for (color, ppm) in expected {
        let r = calculate_colors(&[Brown, Black, Black, Black, Brown, color]).unwrap();
        assert_eq!(r.temp_coefficient, Some(ppm), "{}", color);
    }
}

#[test]
fn test_unset_slots_are_skipped() {
    let with_gaps = calculate(&[Some(Brown), None, Some(Black), Some(Red), None, Some(Gold)]);
    let compact = calculate_colors(&[Brown, Black, Red, Gold]);
    assert_eq!(with_gaps, compact);
}

#[test]
fn test_missing_bands() {
    let err = calculate(&[Some(Brown), Some(Black)]).unwrap_err();
    assert_eq!(err, CalculationError::MissingBands { found: 2 });

    let err = calculate(&[None; 6]).unwrap_err();
    assert_eq!(err, CalculationError::MissingBands { found: 0 });

    let err = calculate(&[Some(Brown), None, Some(Black), None, Some(Red), None]).unwrap_err();
    assert_eq!(err, CalculationError::MissingBands { found: 3 });
}

#[test]
fn test_too_many_bands() {
    let err = calculate_colors(&[Brown; 7]).unwrap_err();
    assert_eq!(err, CalculationError::MissingBands { found: 7 });
}

#[test]
fn test_first_band_rejects_black_silver_gold() {
    for first in [Black, Silver, Gold] {
        for len in MIN_BANDS..=MAX_BANDS {
            let mut bands = vec![Brown; len];
            bands[0] = first;
            let err = calculate_colors(&bands).unwrap_err();
            assert_eq!(
                err,
                CalculationError::InvalidResistanceColor {
                    position: 1,
                    color: first
                }
            );
        }
    }
}

#[test]
fn test_following_digits_reject_silver_gold() {
    let err = calculate_colors(&[Brown, Silver, Red, Gold]).unwrap_err();
    assert_eq!(
        err,
        CalculationError::InvalidResistanceColor {
            position: 2,
            color: Silver
        }
    );

    let err = calculate_colors(&[Brown, Black, Gold, Red, Gold]).unwrap_err();
    assert_eq!(
        err,
        CalculationError::InvalidResistanceColor {
            position: 3,
            color: Gold
        }
    );

    // Black is a valid second digit
    assert!(calculate_colors(&[Brown, Black, Black, Gold]).is_ok());
}

#[test]
fn test_invalid_tolerance_colors() {
    for color in BandColor::ALL {
        let result = calculate_colors(&[Brown, Black, Red, color]);
        if TOLERANCE_COLORS.contains(&color) {
            assert!(result.is_ok(), "{} should be a tolerance color", color);
        } else {
            assert_eq!(
                result.unwrap_err(),
                CalculationError::InvalidToleranceColor { color }
            );
        }
    }
}

#[test]
fn test_invalid_temp_coefficient_colors() {
    for color in BandColor::ALL {
        let result = calculate_colors(&[Brown, Black, Black, Red, Gold, color]);
        if TEMP_COLORS.contains(&color) {
            assert!(result.unwrap().temp_coefficient.is_some());
        } else {
            assert_eq!(
                result.unwrap_err(),
                CalculationError::InvalidTempCoefficientColor { color }
            );
        }
    }
}

#[test]
fn test_first_failure_wins() {
    // Invalid first digit and invalid tolerance: the digit is reported
    let err = calculate_colors(&[Black, Black, Red, Black]).unwrap_err();
    assert!(matches!(
        err,
        CalculationError::InvalidResistanceColor { position: 1, .. }
    ));

    // Invalid tolerance and invalid temperature coefficient: tolerance is reported
    let err = calculate_colors(&[Brown, Black, Black, Red, Black, Black]).unwrap_err();
    assert_eq!(err, CalculationError::InvalidToleranceColor { color: Black });
}

#[test]
fn test_four_band_exhaustive_determinism() {
    for a in BandColor::ALL {
        for b in BandColor::ALL {
            for m in BandColor::ALL {
                for t in BandColor::ALL {
                    let bands = [a, b, m, t];
                    let first = calculate_colors(&bands);
                    assert_eq!(first, calculate_colors(&bands));

                    let expected_ok = (1..=9).contains(&a.code())
                        && b.digit().is_some()
                        && TOLERANCE_COLORS.contains(&t);
                    assert_eq!(first.is_ok(), expected_ok, "{:?}", bands);
                }
            }
        }
    }
}

#[test]
fn test_error_messages() {
    let err = CalculationError::InvalidResistanceColor {
        position: 1,
        color: Black,
    };
    assert_eq!(
        err.message(),
        "Band 1 can't consist of the colors black, silver or gold (got black)"
    );

    let err = CalculationError::InvalidResistanceColor {
        position: 2,
        color: Gold,
    };
    assert_eq!(
        err.message(),
        "Band 2 can't consist of the colors silver or gold (got gold)"
    );

    let err = CalculationError::InvalidToleranceColor { color: Orange };
    assert_eq!(
        err.message(),
        "There is no tolerance associated to the color orange"
    );
}
