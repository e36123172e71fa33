//! Overspend classification
//!
//! The verdict attached to a record is decided by a single [`RemarksRule`].
//! Two rules exist because earlier versions of the product disagreed on the
//! threshold; the rule in force is chosen in settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Policy that turns `(total, salary)` into a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RemarksRule {
    /// Overspent when spending exceeds 90% of salary
    #[default]
    SavingsMargin,
    /// Over budget only when spending exceeds the whole salary
    StrictBudget,
}

impl RemarksRule {
    /// Classify a month's spending against its salary
    ///
    /// ```
    /// use expense_tracker::models::{Money, Remarks, RemarksRule};
    /// let rule = RemarksRule::SavingsMargin;
    /// let salary = Money::from_units(1000, 0);
    /// assert_eq!(rule.classify(Money::from_units(900, 0), salary), Remarks::SavingsMade);
    /// assert_eq!(rule.classify(Money::from_units(901, 0), salary), Remarks::Overspent);
    /// ```
    pub fn classify(&self, total: Money, salary: Money) -> Remarks {
        match self {
            // total > salary * 0.9, kept in integer cents
            RemarksRule::SavingsMargin => {
                if i128::from(total.cents()) * 10 > i128::from(salary.cents()) * 9 {
                    Remarks::Overspent
                } else {
                    Remarks::SavingsMade
                }
            }
            RemarksRule::StrictBudget => {
                if total > salary {
                    Remarks::OverBudget
                } else {
                    Remarks::WithinBudget
                }
            }
        }
    }
}

impl fmt::Display for RemarksRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemarksRule::SavingsMargin => write!(f, "savings margin (over 90% of salary)"),
            RemarksRule::StrictBudget => write!(f, "strict budget (over 100% of salary)"),
        }
    }
}

/// The verdict stored on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remarks {
    #[serde(rename = "Overspent")]
    Overspent,
    #[serde(rename = "Savings Made")]
    SavingsMade,
    #[serde(rename = "Over budget!")]
    OverBudget,
    #[serde(rename = "")]
    WithinBudget,
}

impl Remarks {
    /// The stored text of this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            Remarks::Overspent => "Overspent",
            Remarks::SavingsMade => "Savings Made",
            Remarks::OverBudget => "Over budget!",
            Remarks::WithinBudget => "",
        }
    }

    /// Parse stored verdict text
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Overspent" => Some(Remarks::Overspent),
            "Savings Made" => Some(Remarks::SavingsMade),
            "Over budget!" => Some(Remarks::OverBudget),
            "" => Some(Remarks::WithinBudget),
            _ => None,
        }
    }

    /// Whether this verdict means spending went past the threshold
    pub fn is_over(&self) -> bool {
        matches!(self, Remarks::Overspent | Remarks::OverBudget)
    }
}

impl fmt::Display for Remarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_units(n, 0)
    }

    #[test]
    fn test_savings_margin_boundary() {
        let rule = RemarksRule::SavingsMargin;
        assert_eq!(rule.classify(units(900), units(1000)), Remarks::SavingsMade);
        assert_eq!(rule.classify(units(901), units(1000)), Remarks::Overspent);
        assert_eq!(
            rule.classify(Money::from_cents(90001), units(1000)),
            Remarks::Overspent
        );
    }

    #[test]
    fn test_savings_margin_zero_salary() {
        let rule = RemarksRule::SavingsMargin;
        assert_eq!(rule.classify(Money::zero(), Money::zero()), Remarks::SavingsMade);
        assert_eq!(rule.classify(Money::from_cents(1), Money::zero()), Remarks::Overspent);
    }

    #[test]
    fn test_strict_budget_boundary() {
        let rule = RemarksRule::StrictBudget;
        assert_eq!(rule.classify(units(1000), units(1000)), Remarks::WithinBudget);
        assert_eq!(rule.classify(units(1001), units(1000)), Remarks::OverBudget);
        assert_eq!(rule.classify(units(950), units(1000)), Remarks::WithinBudget);
    }

    #[test]
    fn test_default_rule() {
        assert_eq!(RemarksRule::default(), RemarksRule::SavingsMargin);
    }

    #[test]
    fn test_remarks_text_round_trip() {
        for remarks in [
            Remarks::Overspent,
            Remarks::SavingsMade,
            Remarks::OverBudget,
            Remarks::WithinBudget,
        ] {
            assert_eq!(Remarks::parse(remarks.as_str()), Some(remarks));
        }
        assert_eq!(Remarks::parse("Bogus"), None);
    }

    #[test]
    fn test_remarks_serialize_as_text() {
        let json = serde_json::to_string(&Remarks::SavingsMade).unwrap();
        assert_eq!(json, "\"Savings Made\"");
        let rule: RemarksRule = serde_json::from_str("\"strict_budget\"").unwrap();
        assert_eq!(rule, RemarksRule::StrictBudget);
    }
}
