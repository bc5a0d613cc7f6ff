// ============================================================================
// QuickCheck: Rounding Policies
// Integer division under every policy against an i128 reference
// ============================================================================

use quickcheck::{quickcheck, TestResult};
use rust_decimal::Decimal;
use scaled_decimal::prelude::*;

/// round(a / b) under `mode`, computed exactly in i128
fn reference(mode: RoundingMode, a: i64, b: i64) -> i128 {
    let (n, d) = (i128::from(a), i128::from(b));
    let q = n / d;
    let r = n % d;
    if r == 0 {
        return q;
    }

    let negative = (n < 0) != (d < 0);
    let half = (2 * r.abs()).cmp(&d.abs());
    let away = match mode {
        RoundingMode::Truncate => false,
        RoundingMode::AwayFromZero => true,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::Nearest => half.is_ge(),
        RoundingMode::HalfEven => half.is_gt() || (half.is_eq() && q % 2 != 0),
        RoundingMode::HalfUp => half.is_gt() || (half.is_eq() && !negative),
        RoundingMode::HalfDown => half.is_gt() || (half.is_eq() && negative),
    };

    match (away, negative) {
        (false, _) => q,
        (true, true) => q - 1,
        (true, false) => q + 1,
    }
}

/// Whether a `|b| / 2` correction could push `a` past the i64 range
fn near_limit(a: i64, b: i64) -> bool {
    a.unsigned_abs() > i64::MAX.unsigned_abs() - b.unsigned_abs() / 2
}

quickcheck! {
    fn prop_div_rounded_matches_reference(a: i64, b: i64) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }
        for mode in RoundingMode::ALL {
            let expected = reference(mode, a, b);
            match mode.div_rounded(a, b) {
                Some(value) => {
                    if i128::from(value) != expected {
                        return TestResult::error(format!("{} {} / {} gave {}", mode, a, b, value));
                    }
                }
                None => {
                    let fits = i64::try_from(expected).is_ok();
                    if fits && !near_limit(a, b) {
                        return TestResult::error(format!("{} {} / {} refused", mode, a, b));
                    }
                }
            }
        }
        TestResult::passed()
    }

    fn prop_floor_and_ceiling_bracket_every_policy(a: i64, b: i64) -> TestResult {
        if b == 0 || near_limit(a, b) || (a == i64::MIN && b == -1) {
            return TestResult::discard();
        }
        let floor = Floor::div_rounded(a, b).unwrap();
        let ceiling = Ceiling::div_rounded(a, b).unwrap();
        let exact = a % b == 0;

        let bracketed = RoundingMode::ALL.iter().all(|mode| {
            let v = mode.div_rounded(a, b).unwrap();
            floor <= v && v <= ceiling
        });
        TestResult::from_bool(bracketed && (ceiling - floor == if exact { 0 } else { 1 }))
    }

    fn prop_half_even_ties_land_on_even(k: i32, scale: u16) -> bool {
        // (2k + 1) * s / (2 * s) is always a tie
        let s = i64::from(scale) + 1;
        let a = (2 * i64::from(k) + 1) * s;
        HalfEven::div_rounded(a, 2 * s).unwrap() % 2 == 0
    }

    fn prop_half_up_mirrors_half_down(a: i64, b: i64) -> TestResult {
        if b == 0 || a == i64::MIN || near_limit(a, b) {
            return TestResult::discard();
        }
        let up = HalfUp::div_rounded(a, b).unwrap();
        let down = HalfDown::div_rounded(-a, b).unwrap();
        TestResult::from_bool(up == -down)
    }

    fn prop_symmetric_policies_commute_with_negation(a: i64, b: i64) -> TestResult {
        if b == 0 || a == i64::MIN || near_limit(a, b) {
            return TestResult::discard();
        }
        let symmetric = [
            RoundingMode::Nearest,
            RoundingMode::Truncate,
            RoundingMode::HalfEven,
            RoundingMode::AwayFromZero,
        ];
        TestResult::from_bool(symmetric.iter().all(|mode| {
            mode.div_rounded(-a, b).unwrap() == -mode.div_rounded(a, b).unwrap()
        }))
    }

    fn prop_real_rounding_agrees_with_integer_division(a: i32, b: i32) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }
        let real = Decimal::from(a) / Decimal::from(b);
        TestResult::from_bool(RoundingMode::ALL.iter().all(|mode| {
            mode.round(real) == mode.div_rounded(i64::from(a), i64::from(b))
        }))
    }

    fn prop_money_division_matches_policy(cents: i32, divisor: i16) -> TestResult {
        if divisor == 0 {
            return TestResult::discard();
        }
        let x = FixedDecimal::<2, HalfEven>::from_raw(i64::from(cents));
        let q = x.checked_div_int(i64::from(divisor)).unwrap();
        TestResult::from_bool(
            i128::from(q.raw_value())
                == reference(RoundingMode::HalfEven, i64::from(cents), i64::from(divisor)),
        )
    }
}
