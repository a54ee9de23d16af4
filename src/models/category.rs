//! Expense categories
//!
//! New entries always pick from a closed set of categories. On disk a category
//! is just its label, so reports work on plain label strings and keep working
//! for labels that are no longer (or never were) part of this set.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spending category offered at entry time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Restaurants, takeaway, groceries
    Food,
    /// Fuel, fares, parking
    #[value(alias = "transp")]
    Transport,
    /// Games, outings, hobbies
    Fun,
    /// Rent, utilities, subscriptions
    Bills,
    /// General purchases
    #[value(alias = "shop")]
    Shopping,
    /// Anything else
    #[value(alias = "other")]
    Misc,
}

impl Category {
    /// All categories in menu order
    pub const fn all() -> &'static [Category] {
        &[
            Category::Food,
            Category::Transport,
            Category::Fun,
            Category::Bills,
            Category::Shopping,
            Category::Misc,
        ]
    }

    /// Label stored in the data file
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "🍕 Food & Dining",
            Self::Transport => "🚗 Transport",
            Self::Fun => "🎮 Fun & Games",
            Self::Bills => "📄 Bills & Utilities",
            Self::Shopping => "🛒 Shopping",
            Self::Misc => "🤷 Other Stuff",
        }
    }

    /// Look up a category by its 1-based position in the menu
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::all().get(index))
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
