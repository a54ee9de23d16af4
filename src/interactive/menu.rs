//! The numbered main menu
//!
//! Runs until the user picks Exit (which takes a backup) or input runs out.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::backup::BackupManager;
use crate::cli::expense::NO_EXPENSES_YET;
use crate::cli::{
    create_backup, handle_export_tax, print_added, show_expenses, show_report, show_stats,
    ExportTaxArgs,
};
use crate::config::Settings;
use crate::display::{double_separator, format_tips};
use crate::error::ExpenseResult;
use crate::models::Category;
use crate::reports::MonthWindow;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::prompt::Prompter;

const MONTH_FORMAT_HINT: &str = "Invalid format. Use MM-YYYY (e.g., 08-2023)";

/// One pass through a menu choice
enum Flow {
    Continue,
    Quit,
}

/// An interactive session over arbitrary input and output
pub struct MenuSession<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(
        storage: &'a Storage,
        settings: &'a Settings,
        input: R,
        output: W,
        today: NaiveDate,
    ) -> Self {
        Self {
            storage,
            settings,
            prompter: Prompter::new(input, output),
            today,
        }
    }

    /// Show the banner and loop over the main menu
    pub fn run(&mut self) -> ExpenseResult<()> {
        let rule = double_separator(50);
        self.prompter.say("")?;
        self.prompter.say(&rule)?;
        self.prompter.say("        💰 Personal Expense Tracker 💰")?;
        self.prompter.say(&rule)?;

        loop {
            self.prompter.say("")?;
            self.prompter.say("What would you like to do?")?;
            self.prompter.say("1. Add New Expense")?;
            self.prompter.say("2. View Expenses")?;
            self.prompter.say("3. Generate Monthly Report")?;
            self.prompter.say("4. 🍕 Quick Food Entry")?;
            self.prompter.say("5. 📊 Export Tax Expenses")?;
            self.prompter.say("6. 💡 Spending Tips")?;
            self.prompter.say("7. 💾 Create Backup")?;
            self.prompter.say("8. Exit")?;

            let Some(choice) = self.prompter.ask("\nEnter your choice (1-8): ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let flow = match self.dispatch(&choice) {
                Ok(flow) => flow,
                Err(e) => {
                    warn!(error = %e, choice = %choice, "menu action failed");
                    self.prompter.say(&format!("⚠️  {}", e))?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    /// Run one menu choice; errors are reported by the caller and the menu goes on
    fn dispatch(&mut self, choice: &str) -> ExpenseResult<Flow> {
        match choice {
            "1" => self.add_expense(),
            "2" => self.view_expenses(),
            "3" => self.monthly_report(),
            "4" => self.quick_food(),
            "5" => self.export_tax(),
            "6" => {
                self.prompter.say("")?;
                write!(self.prompter.out(), "{}", format_tips())?;
                Ok(Flow::Continue)
            }
            "7" => {
                self.backup()?;
                Ok(Flow::Continue)
            }
            "8" => {
                self.exit()?;
                Ok(Flow::Quit)
            }
            _ => {
                self.prompter.say("Hmm, that option doesn't exist. Try 1-8.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_expense(&mut self) -> ExpenseResult<Flow> {
        self.prompter.say("\n--- Add New Expense ---")?;

        let Some(date) = self.prompter.ask_date(self.today)? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompter.ask_category()? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.prompter.ask("Description (what was it for?): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompter.ask_amount("Amount: $")? else {
            return Ok(Flow::Quit);
        };

        let added =
            ExpenseService::new(self.storage, self.settings).add(date, category, &description, amount)?;
        self.prompter.say("")?;
        print_added(&added, self.settings, self.prompter.out())?;
        Ok(Flow::Continue)
    }

    fn view_expenses(&mut self) -> ExpenseResult<Flow> {
        self.prompter.say("\n--- View Expenses ---")?;
        self.prompter.say("1. View all expenses")?;
        self.prompter.say("2. Filter by category")?;
        self.prompter.say("3. Filter by month/year")?;
        self.prompter.say("4. Show category statistics")?;

        let Some(choice) = self.prompter.ask("What do you want to see? (1-4): ")? else {
            return Ok(Flow::Quit);
        };

        match choice.as_str() {
            "1" => show_expenses(self.storage, self.settings, None, None, self.prompter.out())?,
            "2" => {
                self.prompter.say("\nCategories:")?;
                self.prompter.list_categories()?;
                let Some(answer) = self
                    .prompter
                    .ask("Select category (number) or press Enter for all: ")?
                else {
                    return Ok(Flow::Quit);
                };

                let category = if answer.is_empty() {
                    None
                } else {
                    match answer.parse().ok().and_then(Category::from_menu_choice) {
                        Some(category) => Some(category),
                        None => {
                            self.prompter.say("Invalid choice. Please try again.")?;
                            return Ok(Flow::Continue);
                        }
                    }
                };
                show_expenses(self.storage, self.settings, category, None, self.prompter.out())?;
            }
            "3" => {
                let Some(answer) = self
                    .prompter
                    .ask("Enter month and year (MM-YYYY) or press Enter for all: ")?
                else {
                    return Ok(Flow::Quit);
                };

                let month = if answer.is_empty() {
                    None
                } else {
                    match MonthWindow::parse(&answer) {
                        Ok(window) => Some(window),
                        Err(_) => {
                            self.prompter.say(MONTH_FORMAT_HINT)?;
                            return Ok(Flow::Continue);
                        }
                    }
                };
                show_expenses(self.storage, self.settings, None, month, self.prompter.out())?;
            }
            "4" => {
                self.prompter.say("")?;
                show_stats(self.storage, self.settings, self.prompter.out())?;
            }
            _ => self.prompter.say("Invalid choice. Pick 1-4.")?,
        }

        Ok(Flow::Continue)
    }

    fn monthly_report(&mut self) -> ExpenseResult<Flow> {
        self.prompter.say("\n--- Monthly Spending Report ---")?;

        let records = self.storage.expenses.load_records()?;
        if records.is_empty() {
            self.prompter.say(NO_EXPENSES_YET)?;
            return Ok(Flow::Continue);
        }

        let window = loop {
            let Some(answer) = self.prompter.ask("Enter month and year (MM-YYYY): ")? else {
                return Ok(Flow::Quit);
            };
            match MonthWindow::parse(&answer) {
                Ok(window) => break window,
                Err(_) => self.prompter.say(MONTH_FORMAT_HINT)?,
            }
        };

        self.prompter.say("")?;
        show_report(&records, self.settings, window, self.prompter.out())?;
        Ok(Flow::Continue)
    }

    fn quick_food(&mut self) -> ExpenseResult<Flow> {
        self.prompter.say("\n🍕 Quick Food Expense")?;

        let Some(description) = self.prompter.ask("What did you eat? ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompter.ask_amount("Amount: $")? else {
            return Ok(Flow::Quit);
        };

        let added = ExpenseService::new(self.storage, self.settings).quick_food(
            self.today,
            &description,
            amount,
        )?;
        print_added(&added, self.settings, self.prompter.out())?;
        Ok(Flow::Continue)
    }

    fn export_tax(&mut self) -> ExpenseResult<Flow> {
        handle_export_tax(
            self.storage,
            self.settings,
            ExportTaxArgs::default(),
            self.today,
            self.prompter.out(),
        )?;
        Ok(Flow::Continue)
    }

    fn backup(&mut self) -> ExpenseResult<bool> {
        let manager = BackupManager::new(self.storage.paths());
        let created = create_backup(&manager, self.prompter.out())?;
        Ok(created.is_some())
    }

    fn exit(&mut self) -> ExpenseResult<()> {
        let backed_up = match self.backup() {
            Ok(backed_up) => backed_up,
            Err(e) => {
                warn!(error = %e, "backup on exit failed");
                self.prompter.say(&format!("⚠️  {}", e))?;
                false
            }
        };
        self.prompter.say("\nThat's all for now! Catch you later! 👋")?;
        if backed_up {
            self.prompter.say("(Don't worry, your data has been backed up)")?;
        }
        Ok(())
    }
}
