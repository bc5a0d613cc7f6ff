// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see the engine's trace output.

use scaled_decimal::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Scaled Decimal Example ===\n");

    // Compile-time precision
    println!("Invoice (Money = 2 decimal places):");
    let unit: Money = "19.99".parse().unwrap();
    let tax_rate: FixedDecimal<4> = "0.0825".parse().unwrap();
    let subtotal = unit * 3i64;
    let tax = subtotal * tax_rate;
    let total = subtotal + tax;
    println!("  subtotal {:>10}", subtotal);
    println!("  tax      {:>10}", tax);
    println!("  total    {:>10}", total);
    println!("  debug    {:?}\n", total);

    // The same division under every policy
    println!("-0.25 / 2 under each rounding policy:");
    let x: DynDecimal = "-0.25".parse().unwrap();
    for mode in RoundingMode::ALL {
        let raw = mode.div_rounded(x.raw_value(), 2).unwrap();
        let q = DynDecimal::<Nearest>::from_raw(raw, x.precision()).unwrap();
        println!("  {:<15} {:>6}  (to 1 dp: {})", mode.name(), q, q.round_dp_with(1, mode).unwrap());
    }
    println!();

    // Runtime precision
    println!("Currency conversion (runtime precision):");
    let config = DecimalConfig::new(4);
    let rate: DynDecimal = config.parse("1.0842").unwrap();
    let amount: Money = "250.00".parse().unwrap();
    let converted = amount * rate;
    println!("  {} x {} = {}", amount, rate, converted);

    // Overflow is reported, not wrapped
    let huge = Money::from_raw(i64::MAX);
    match huge.checked_add(Money::from_raw(1)) {
        Ok(v) => println!("  unexpected {}", v),
        Err(e) => println!("  {} + 0.01 -> {}", huge, e),
    }

    // Lossy multiply-divide is flagged
    let x = FixedDecimal::<18>::from_raw(999_999_999_999_999_999);
    let outcome = x.mul_outcome(x).unwrap();
    println!("  {} squared = {} (lossy: {})\n", x, outcome.value, outcome.lossy);

    // Text in other locales and interchange forms
    println!("Text and interchange:");
    let german = NumericLocale::new(',').with_grouping('.');
    let parsed: DynDecimal = DynDecimal::parse_with("1.234.567,891", 2, &german).unwrap();
    println!("  \"1.234.567,891\" (de) -> {}", parsed);
    println!("  rendered back        -> {}", parsed.format_with(&german));

    let me = parsed.to_mantissa_exponent();
    println!("  mantissa/exponent    -> {}e{}", me.mantissa, me.exponent);

    let (zero, err) = Money::parse_or_zero("abc");
    println!("  \"abc\" -> {} ({:?})", zero, err);

    println!("\n=== Example Complete ===");
}
