//! `config` command: show paths and current settings

use std::io::Write;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;

/// Print the resolved paths and the active settings
pub fn show_config<W: Write>(
    paths: &ExpensePaths,
    settings: &Settings,
    out: &mut W,
) -> ExpenseResult<()> {
    let symbol = &settings.currency_symbol;

    writeln!(out, "Expense Logger Configuration")?;
    writeln!(out, "============================")?;
    writeln!(out, "Data directory:   {}", paths.base_dir().display())?;
    writeln!(out, "Expense file:     {}", paths.expense_file().display())?;
    writeln!(out, "Backup directory: {}", paths.backup_dir().display())?;
    writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
    writeln!(out)?;
    writeln!(out, "Budget goals:")?;
    for (label, goal) in &settings.category_goals {
        writeln!(out, "  {}: {}", label, goal.format_with_symbol(symbol))?;
    }
    writeln!(
        out,
        "  (anything else): {}",
        settings.default_goal.format_with_symbol(symbol)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Monthly food limit: {} (alert above {:.0}%)",
        settings.monthly_food_limit.format_with_symbol(symbol),
        settings.overspend_warning_percent
    )?;
    writeln!(
        out,
        "Pricey meal above:  {}",
        settings.pricey_meal_threshold.format_with_symbol(symbol)
    )?;
    writeln!(out, "Watchlist:          {}", settings.watchlist_categories.join(", "))?;
    writeln!(out, "Business (tax):     {}", settings.business_categories.join(", "))?;
    Ok(())
}
