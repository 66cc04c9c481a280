use crate::domain::operator::Operator;
use crate::error::CoreError;
use crate::table::PrefixTable;
use std::fmt;
use std::str::FromStr;

/// Digits in a subscriber number once the trunk or country prefix is removed.
pub const SUBSCRIBER_DIGITS: usize = 10;
/// Leading digits that identify the operator block.
pub const PREFIX_DIGITS: usize = 3;
/// Country calling prefix used for international formatting unless overridden.
pub const DEFAULT_COUNTRY_PREFIX: &str = "+63";

/// Strips formatting noise and the trunk/country prefix from a raw number.
///
/// Every non-digit character is dropped first. Then exactly one leading `0`
/// is removed, or failing that exactly one leading `63`; the rules never
/// combine, so `"063…"` loses only the `0` and keeps `"63…"` as its body.
/// The result may be shorter than ten digits or empty.
pub fn clean(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if let Some(rest) = digits.strip_prefix('0') {
        rest.to_string()
    } else if let Some(rest) = digits.strip_prefix("63") {
        rest.to_string()
    } else {
        digits
    }
}

/// Non-panicking probe: true iff `raw` cleans to a valid subscriber number.
pub fn validate(raw: &str) -> bool {
    is_valid_subscriber(&clean(raw))
}

fn is_valid_subscriber(digits: &str) -> bool {
    // The digit check does not assume the input came from `clean`.
    !digits.is_empty()
        && digits.len() == SUBSCRIBER_DIGITS
        && digits.chars().all(|c| c.is_ascii_digit())
}

/// A validated, normalized Philippine mobile subscriber number.
///
/// The ten-digit string is the immutable identity of the value; the operator
/// is classified once at construction. Only the country calling prefix used
/// by [`Msisdn::get`] can be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Msisdn {
    digits: String,
    operator: Operator,
    country_prefix: String,
}

impl Msisdn {
    /// Cleans and validates `raw`, classifying against the builtin table.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        Self::with_table(raw, PrefixTable::builtin())
    }

    /// Cleans and validates `raw`, classifying against a caller-supplied
    /// table.
    pub fn with_table(raw: &str, table: &PrefixTable) -> Result<Self, CoreError> {
        let digits = clean(raw);
        if !is_valid_subscriber(&digits) {
            return Err(CoreError::InvalidMsisdn {
                raw: raw.to_string(),
            });
        }
        let operator = table.operator_of(&digits);
        Ok(Self {
            digits,
            operator,
            country_prefix: DEFAULT_COUNTRY_PREFIX.to_string(),
        })
    }

    /// The bare ten-digit subscriber number.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The first three digits of the subscriber number.
    pub fn prefix(&self) -> &str {
        &self.digits[..PREFIX_DIGITS]
    }

    /// The issuing operator as classified at construction.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn country_prefix(&self) -> &str {
        &self.country_prefix
    }

    /// Overrides the country calling prefix used by [`Msisdn::get`] when
    /// `country_code` is set.
    pub fn set_country_prefix(&mut self, prefix: &str) {
        self.country_prefix = prefix.to_string();
    }

    /// Renders the number, locally (`0` + digits) or with the country
    /// calling prefix. A non-empty separator splits the result into the
    /// grouping `[trunk-or-prefix][3][3][4]`, e.g. `0917-123-1234` and
    /// `+63 917 123 1234`.
    pub fn get(&self, country_code: bool, separator: &str) -> String {
        let digits = self.digits.as_str();
        if country_code {
            [
                self.country_prefix.as_str(),
                &digits[..3],
                &digits[3..6],
                &digits[6..],
            ]
            .join(separator)
        } else {
            let trunk = format!("0{}", &digits[..3]);
            [trunk.as_str(), &digits[3..6], &digits[6..]].join(separator)
        }
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get(false, ""))
    }
}

impl FromStr for Msisdn {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{clean, validate, Msisdn};
    use crate::domain::operator::Operator;
    use crate::error::CoreError;
    use crate::table::PrefixTable;

    #[test]
    fn clean_strips_formatting_noise() {
        assert_eq!(clean("+63-917-123-1234"), "9171231234");
        assert_eq!(clean("0917.123.1234"), "9171231234");
        assert_eq!(clean(" +639171231234  "), "9171231234");
    }

    #[test]
    fn clean_strips_at_most_one_prefix() {
        // Only the leading 0 goes; the 63 body stays.
        assert_eq!(clean("0639171231234"), "639171231234");
        assert_eq!(clean("639171231234"), "9171231234");
        assert_eq!(clean("9171231234"), "9171231234");
    }

    #[test]
    fn clean_handles_degenerate_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("call me maybe"), "");
        assert_eq!(clean("0"), "");
    }

    #[test]
    fn validate_accepts_formatted_variants() {
        let valid = [
            "09171231234",
            "0917-123-1234",
            "63917-123-1234",
            "+63-917-123-1234",
            "+63.917.123.1234 ",
            "+639171231234",
            " +639171231234  ",
        ];
        for number in valid {
            assert!(validate(number), "{number:?} should be valid");
        }
    }

    #[test]
    fn validate_rejects_wrong_lengths() {
        assert!(!validate("0918123123"));
        assert!(!validate("+6391812312345"));
        assert!(!validate(""));
        assert!(!validate("hello"));
    }

    #[test]
    fn new_rejects_invalid_input_and_keeps_raw() {
        let err = Msisdn::new("0918123123").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidMsisdn {
                raw: "0918123123".to_string()
            }
        );
        assert_eq!(err.status_code(), 400);
        assert!(Msisdn::new("").is_err());
        assert!(Msisdn::new("+6391812312345").is_err());
    }

    #[test]
    fn new_normalizes_digits() {
        let msisdn = Msisdn::new("+63917123-1234").unwrap();
        assert_eq!(msisdn.digits(), "9171231234");
    }

    #[test]
    fn prefix_is_first_three_digits() {
        let msisdn = Msisdn::new("09171231234").unwrap();
        assert_eq!(msisdn.prefix(), "917");
    }

    #[test]
    fn get_renders_plain_forms() {
        let msisdn = Msisdn::new("+63917123-1234").unwrap();
        assert_eq!(msisdn.get(false, ""), "09171231234");
        assert_eq!(msisdn.get(true, ""), "+639171231234");
    }

    #[test]
    fn get_groups_with_separator() {
        let msisdn = Msisdn::new("+63917123-1234").unwrap();
        assert_eq!(msisdn.get(false, "-"), "0917-123-1234");
        assert_eq!(msisdn.get(true, " "), "+63 917 123 1234");
    }

    #[test]
    fn set_country_prefix_overrides_default() {
        let mut msisdn = Msisdn::new("09171231234").unwrap();
        assert_eq!(msisdn.country_prefix(), "+63");
        msisdn.set_country_prefix("63");
        assert_eq!(msisdn.get(true, ""), "639171231234");
        assert_eq!(msisdn.get(true, " "), "63 917 123 1234");
    }

    #[test]
    fn round_trips_through_local_format() {
        let original = "+63917123-1234";
        let msisdn = Msisdn::new(original).unwrap();
        assert_eq!(clean(&msisdn.get(false, "")), clean(original));
    }

    #[test]
    fn classifies_anchor_numbers() {
        let cases = [
            ("09171231234", Operator::Globe),
            ("09191231234", Operator::Smart),
            ("09321231234", Operator::Sun),
            ("09911231234", Operator::Dito),
            ("08881231234", Operator::Unknown),
        ];
        for (number, operator) in cases {
            let msisdn = Msisdn::new(number).unwrap();
            assert_eq!(msisdn.operator(), operator, "{number}");
        }
    }

    #[test]
    fn operator_is_idempotent() {
        let msisdn = Msisdn::new("09171231234").unwrap();
        assert_eq!(msisdn.operator(), msisdn.operator());
    }

    #[test]
    fn with_table_uses_the_supplied_table() {
        let table =
            PrefixTable::new([(Operator::Dito, vec!["917".to_string()])]).unwrap();
        let msisdn = Msisdn::with_table("09171231234", &table).unwrap();
        assert_eq!(msisdn.operator(), Operator::Dito);
    }

    #[test]
    fn display_and_from_str() {
        let msisdn: Msisdn = "+639171231234".parse().unwrap();
        assert_eq!(msisdn.to_string(), "09171231234");
        assert!("0918123123".parse::<Msisdn>().is_err());
    }
}
