//! The fixed set of spending categories on an expense form

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// One of the seven spending categories tracked per month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electricity,
    Water,
    Gas,
    Food,
    Travel,
    Shopping,
    Miscellaneous,
}

impl Category {
    /// All categories in form order
    pub const ALL: [Category; 7] = [
        Category::Electricity,
        Category::Water,
        Category::Gas,
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Miscellaneous,
    ];

    /// Stable field name, used in error messages
    pub fn field_name(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Water => "water",
            Category::Gas => "gas",
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Shopping => "shopping",
            Category::Miscellaneous => "miscellaneous",
        }
    }

    /// Column heading for tables and exports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Water => "Water",
            Category::Gas => "Gas",
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Amounts spent in each category for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryAmounts {
    pub electricity: Money,
    pub water: Money,
    pub gas: Money,
    pub food: Money,
    pub travel: Money,
    pub shopping: Money,
    pub miscellaneous: Money,
}

impl CategoryAmounts {
    /// Get the amount for a category
    pub fn get(&self, category: Category) -> Money {
        match category {
            Category::Electricity => self.electricity,
            Category::Water => self.water,
            Category::Gas => self.gas,
            Category::Food => self.food,
            Category::Travel => self.travel,
            Category::Shopping => self.shopping,
            Category::Miscellaneous => self.miscellaneous,
        }
    }

    /// Set the amount for a category
    pub fn set(&mut self, category: Category, amount: Money) {
        let slot = match category {
            Category::Electricity => &mut self.electricity,
            Category::Water => &mut self.water,
            Category::Gas => &mut self.gas,
            Category::Food => &mut self.food,
            Category::Travel => &mut self.travel,
            Category::Shopping => &mut self.shopping,
            Category::Miscellaneous => &mut self.miscellaneous,
        };
        *slot = amount;
    }

    /// Iterate over (category, amount) pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Sum of all seven categories
    ///
    /// Fails with `InvalidAmount` naming the category whose amount pushes the
    /// sum past the representable range.
    pub fn total(&self) -> ExpenseResult<Money> {
        self.iter().try_fold(Money::zero(), |sum, (category, amount)| {
            sum.checked_add(amount).ok_or_else(|| {
                ExpenseError::invalid_amount(
                    category.field_name(),
                    amount.to_string(),
                    "amount too large",
                )
            })
        })
    }
}
