//! Terminal rendering for replies

use crate::service::Reply;
use rust_decimal::Decimal;

/// Print a reply the way the REPL presents it
pub(crate) fn print_reply(reply: &Reply) {
    match reply {
        Reply::Prices {
            records,
            unresolved,
        } => {
            if records.is_empty() {
                println!("\nNo price data found for that request.");
            }
            for record in records {
                println!("\n{}", record.description);
                println!("{}", "-".repeat(record.description.len()));
                println!("Price: ${}", format_usd(record.price));
                println!("Confidence Interval: {}", record.confidence_interval);
                println!("Time: {}", record.display_time);
            }
            if !unresolved.is_empty() {
                println!("\nNo matching price feed for: {}", unresolved.join(", "));
            }
        }
        Reply::Chat(text) => println!("\nHere you go: {text}"),
    }
}

/// Format a decimal as a dollar amount: two decimal places, thousands
/// separators (e.g. 42350.129 -> "42,350.13")
pub(crate) fn format_usd(value: Decimal) -> String {
    let text = format!("{:.2}", value.round_dp(2));
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_usd_thousands() {
        assert_eq!(format_usd(dec!(42350.12345678)), "42,350.12");
        assert_eq!(format_usd(dec!(1234567.89)), "1,234,567.89");
    }

    #[test]
    fn test_format_usd_small() {
        assert_eq!(format_usd(dec!(0.67)), "0.67");
        assert_eq!(format_usd(dec!(7)), "7.00");
        assert_eq!(format_usd(dec!(999)), "999.00");
        assert_eq!(format_usd(dec!(1000)), "1,000.00");
    }

    #[test]
    fn test_format_usd_rounds_half_even() {
        // rust_decimal rounds to even at the midpoint
        assert_eq!(format_usd(dec!(1.005)), "1.00");
        assert_eq!(format_usd(dec!(1.015)), "1.02");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(dec!(-1234.5)), "-1,234.50");
    }
}
