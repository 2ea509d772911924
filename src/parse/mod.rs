//! Event title parsing
//!
//! Calendar events carry their amounts in the title text. Two shapes are
//! recognized:
//!
//! - paydays: exactly `Payday ($<amount>)`, no thousands separators
//! - bills: `<name> ($<amount>)` or `<name>$<amount>`, where the amount may
//!   use comma thousands separators
//!
//! Parsing is a pure string-to-struct step with no calendar knowledge, so
//! the extractors and the projector can be tested with synthetic titles.

use regex::Regex;

use crate::models::Money;

const PAYDAY_PATTERN: &str = r"^Payday \(\$(\d+(?:\.\d{2})?)\)$";
const BILL_PATTERN: &str =
    r"^(.+?)\s*(?:\(\$|\$)(\d{1,3}(?:,\d{3})*(?:\.\d{2})?|\d+(?:\.\d{2})?)\)?$";

/// Recognizes payday and bill amounts embedded in event titles
#[derive(Debug)]
pub struct TitleParser {
    payday: Regex,
    bill: Regex,
}

impl TitleParser {
    pub fn new() -> Self {
        Self {
            payday: Regex::new(PAYDAY_PATTERN).expect("payday pattern compiles"),
            bill: Regex::new(BILL_PATTERN).expect("bill pattern compiles"),
        }
    }

    /// Extract the amount from a payday title, or None if it doesn't match
    pub fn parse_payday(&self, title: &str) -> Option<Money> {
        let captures = self.payday.captures(title)?;
        Money::parse(&captures[1]).ok()
    }

    /// Extract (name, amount) from a bill title, or None if it doesn't match
    ///
    /// The name is trimmed of surrounding whitespace; commas are stripped
    /// from the amount before numeric parsing.
    pub fn parse_bill(&self, title: &str) -> Option<(String, Money)> {
        let captures = self.bill.captures(title)?;
        let name = captures[1].trim().to_string();
        let amount = Money::parse(&captures[2].replace(',', "")).ok()?;
        Some((name, amount))
    }
}

impl Default for TitleParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payday() {
        let parser = TitleParser::new();
        assert_eq!(
            parser.parse_payday("Payday ($1000.00)"),
            Some(Money::from_cents(100000))
        );
        assert_eq!(
            parser.parse_payday("Payday ($950)"),
            Some(Money::from_cents(95000))
        );
    }

    #[test]
    fn test_payday_pattern_is_strict() {
        let parser = TitleParser::new();
        assert!(parser.parse_payday("Payday").is_none());
        assert!(parser.parse_payday("payday ($1000.00)").is_none());
        assert!(parser.parse_payday("Payday ($1,000.00)").is_none());
        assert!(parser.parse_payday("Payday ($1000.5)").is_none());
        assert!(parser.parse_payday("Payday ($1000.00) extra").is_none());
        assert!(parser.parse_payday("Bonus ($1000.00)").is_none());
    }

    #[test]
    fn test_parse_bill_parenthesized_form() {
        let parser = TitleParser::new();
        assert_eq!(
            parser.parse_bill("Rent ($400.00)"),
            Some(("Rent".into(), Money::from_cents(40000)))
        );
        assert_eq!(
            parser.parse_bill("Car Insurance ($123.45)"),
            Some(("Car Insurance".into(), Money::from_cents(12345)))
        );
    }

    #[test]
    fn test_parse_bill_bare_form() {
        let parser = TitleParser::new();
        assert_eq!(
            parser.parse_bill("Phone$50"),
            Some(("Phone".into(), Money::from_cents(5000)))
        );
        assert_eq!(
            parser.parse_bill("Phone $50.00"),
            Some(("Phone".into(), Money::from_cents(5000)))
        );
    }

    #[test]
    fn test_parse_bill_thousands_separators() {
        let parser = TitleParser::new();
        assert_eq!(
            parser.parse_bill("Mortgage ($1,250.00)"),
            Some(("Mortgage".into(), Money::from_cents(125000)))
        );
        assert_eq!(
            parser.parse_bill("Tuition ($12,345)"),
            Some(("Tuition".into(), Money::from_cents(1234500)))
        );
    }

    #[test]
    fn test_parse_bill_trims_name() {
        let parser = TitleParser::new();
        assert_eq!(
            parser.parse_bill("  Water Bill  ($30.00)"),
            Some(("Water Bill".into(), Money::from_cents(3000)))
        );
    }

    #[test]
    fn test_parse_bill_rejects_non_matching() {
        let parser = TitleParser::new();
        assert!(parser.parse_bill("Team lunch").is_none());
        assert!(parser.parse_bill("$50").is_none());
        assert!(parser.parse_bill("").is_none());
    }
}
