//! User settings for the expense logger
//!
//! Holds the budget goals, the monthly food limit and the category lists that
//! drive reminders and the tax export. Settings are loaded once at startup and
//! passed by reference to whatever needs them.
//!
//! Amounts in `config.json` are decimal strings in currency units
//! (`"monthly_food_limit": "1000.00"`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{Category, Money};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Per-category spending ceiling used by the monthly report, keyed by label
    #[serde(default = "default_category_goals")]
    pub category_goals: BTreeMap<String, Money>,

    /// Ceiling for labels missing from `category_goals`
    #[serde(default = "default_goal")]
    pub default_goal: Money,

    /// Lump-sum monthly limit that Food & Dining spend is checked against
    #[serde(default = "default_monthly_food_limit")]
    pub monthly_food_limit: Money,

    /// Percentage of `monthly_food_limit` above which an alert is raised
    #[serde(default = "default_overspend_warning_percent")]
    pub overspend_warning_percent: f64,

    /// Categories that get a reminder whenever an expense is added
    #[serde(default = "default_watchlist")]
    pub watchlist_categories: Vec<String>,

    /// Categories included in the tax export
    #[serde(default = "default_business_categories")]
    pub business_categories: Vec<String>,

    /// Quick food entries above this amount print a hint
    #[serde(default = "default_pricey_meal_threshold")]
    pub pricey_meal_threshold: Money,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_category_goals() -> BTreeMap<String, Money> {
    [
        (Category::Food, 400),
        (Category::Transport, 200),
        (Category::Fun, 100),
        (Category::Bills, 500),
        (Category::Shopping, 300),
        (Category::Misc, 200),
    ]
    .into_iter()
    .map(|(category, dollars)| {
        (
            category.label().to_string(),
            Money::from_dollars_cents(dollars, 0),
        )
    })
    .collect()
}

fn default_goal() -> Money {
    Money::from_dollars_cents(150, 0)
}

fn default_monthly_food_limit() -> Money {
    Money::from_dollars_cents(1000, 0)
}

fn default_overspend_warning_percent() -> f64 {
    80.0
}

fn default_watchlist() -> Vec<String> {
    vec![
        Category::Food.label().to_string(),
        Category::Shopping.label().to_string(),
    ]
}

fn default_business_categories() -> Vec<String> {
    vec![
        Category::Transport.label().to_string(),
        Category::Bills.label().to_string(),
    ]
}

fn default_pricey_meal_threshold() -> Money {
    Money::from_dollars_cents(20, 0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            category_goals: default_category_goals(),
            default_goal: default_goal(),
            monthly_food_limit: default_monthly_food_limit(),
            overspend_warning_percent: default_overspend_warning_percent(),
            watchlist_categories: default_watchlist(),
            business_categories: default_business_categories(),
            pricey_meal_threshold: default_pricey_meal_threshold(),
        }
    }
}

impl Settings {
    /// Budget goal for a category label, falling back to `default_goal`
    pub fn goal_for(&self, label: &str) -> Money {
        self.category_goals
            .get(label)
            .copied()
            .unwrap_or(self.default_goal)
    }

    /// Whether the label is on the overspending watchlist
    pub fn is_watchlisted(&self, label: &str) -> bool {
        self.watchlist_categories.iter().any(|c| c == label)
    }

    /// Whether the label counts as a business expense
    pub fn is_business(&self, label: &str) -> bool {
        self.business_categories.iter().any(|c| c == label)
    }

    /// Load settings from disk
    ///
    /// When the file doesn't exist yet the defaults are written there so they
    /// can be edited; failing to write them is logged and the defaults used.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            match settings.save(paths) {
                Ok(()) => info!(path = %settings_path.display(), "wrote default settings"),
                Err(e) => warn!(error = %e, "could not write default settings"),
            }
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
