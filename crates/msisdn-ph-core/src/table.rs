use crate::domain::operator::Operator;
use crate::error::CoreError;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Operators in the order classification checks them. The first matching
/// prefix wins, so the order is part of the contract.
pub const CHECK_ORDER: [Operator; 5] = [
    Operator::Globe,
    Operator::Smart,
    Operator::Sun,
    Operator::Dito,
    Operator::Gomo,
];

const MIN_PREFIX_DIGITS: usize = 3;
const MAX_PREFIX_DIGITS: usize = 4;

/// Read-only mapping from operator to its allocated number prefixes.
///
/// Entries are normalized into [`CHECK_ORDER`] at construction, and a prefix
/// may belong to at most one operator, so classification is deterministic
/// regardless of how the lists were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    entries: Vec<OperatorPrefixes>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OperatorPrefixes {
    operator: Operator,
    prefixes: Vec<String>,
}

impl PrefixTable {
    /// Builds a table from per-operator prefix lists.
    ///
    /// Prefixes must be three or four ASCII digits. `Operator::Unknown` is
    /// rejected as a key, as is any prefix appearing under two operators.
    /// Operators without a list classify nothing.
    pub fn new<I>(lists: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (Operator, Vec<String>)>,
    {
        let mut by_slot: Vec<Vec<String>> = vec![Vec::new(); CHECK_ORDER.len()];
        let mut seen: HashMap<String, Operator> = HashMap::new();

        for (operator, prefixes) in lists {
            let slot = CHECK_ORDER
                .iter()
                .position(|&candidate| candidate == operator)
                .ok_or(CoreError::UnknownOperatorEntry)?;
            for prefix in prefixes {
                if !is_valid_prefix(&prefix) {
                    return Err(CoreError::InvalidPrefix(prefix));
                }
                if let Some(&first) = seen.get(&prefix) {
                    if first != operator {
                        return Err(CoreError::OverlappingPrefix {
                            prefix,
                            first,
                            second: operator,
                        });
                    }
                    continue;
                }
                seen.insert(prefix.clone(), operator);
                by_slot[slot].push(prefix);
            }
        }

        let entries = CHECK_ORDER
            .iter()
            .zip(by_slot)
            .map(|(&operator, prefixes)| OperatorPrefixes { operator, prefixes })
            .collect();
        Ok(Self { entries })
    }

    /// The process-wide table built from the bundled prefix data, parsed on
    /// first use and shared by every caller afterwards.
    pub fn builtin() -> &'static PrefixTable {
        static BUILTIN: OnceLock<PrefixTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let lists = CHECK_ORDER
                .iter()
                .map(|&operator| (operator, bundled_prefixes(operator)));
            PrefixTable::new(lists).expect("bundled prefix data is valid")
        })
    }

    /// Classifies a cleaned subscriber number.
    ///
    /// Each candidate prefix is compared against the same number of leading
    /// digits as the prefix itself holds, so three- and four-digit entries
    /// coexist in one table.
    pub fn operator_of(&self, digits: &str) -> Operator {
        for entry in &self.entries {
            for prefix in &entry.prefixes {
                if digits.starts_with(prefix.as_str()) {
                    return entry.operator;
                }
            }
        }
        Operator::Unknown
    }

    pub fn prefixes_for(&self, operator: Operator) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.operator == operator)
            .map(|entry| entry.prefixes.as_slice())
            .unwrap_or(&[])
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    (MIN_PREFIX_DIGITS..=MAX_PREFIX_DIGITS).contains(&prefix.len())
        && prefix.chars().all(|c| c.is_ascii_digit())
}

fn bundled_prefixes(operator: Operator) -> Vec<String> {
    let raw = match operator {
        Operator::Globe => include_str!("../data/globe.json"),
        Operator::Smart => include_str!("../data/smart.json"),
        Operator::Sun => include_str!("../data/sun.json"),
        Operator::Dito => include_str!("../data/dito.json"),
        Operator::Gomo => include_str!("../data/gomo.json"),
        Operator::Unknown => unreachable!("unknown is never a table key"),
    };
    serde_json::from_str(raw).expect("bundled prefix data is valid JSON")
}
