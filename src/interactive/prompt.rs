//! Line-based prompts that reprompt until the answer is usable
//!
//! Every prompt returns `Ok(None)` once input is exhausted, so a closed
//! stdin ends the session instead of looping forever.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::cli::expense::DATE_FALLBACK_WARNING;
use crate::error::ExpenseResult;
use crate::models::{AmountInputError, Category, EntryDate, Money};

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for anything that is not a prompt
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write one line
    pub fn say(&mut self, line: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prompt for a trimmed line of text
    pub fn ask(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a positive amount
    pub fn ask_amount(&mut self, prompt: &str) -> ExpenseResult<Option<Money>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };

            match Money::parse_amount_input(&answer) {
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => self.say(&amount_complaint(&e))?,
            }
        }
    }

    /// Prompt for an entry date; bad input falls back to `today` with a warning
    pub fn ask_date(&mut self, today: NaiveDate) -> ExpenseResult<Option<NaiveDate>> {
        let prompt = format!("Date (YYYY-MM-DD) [Today: {}]: ", today);
        let Some(answer) = self.ask(&prompt)? else {
            return Ok(None);
        };

        let entry = EntryDate::parse(&answer, today);
        if entry.is_fallback() {
            self.say(DATE_FALLBACK_WARNING)?;
        }
        Ok(Some(entry.date()))
    }

    /// Show the numbered category list and prompt until a valid choice
    pub fn ask_category(&mut self) -> ExpenseResult<Option<Category>> {
        self.say("")?;
        self.say("Where did you spend money?")?;
        self.list_categories()?;

        loop {
            let Some(answer) = self.ask("Select category (number): ")? else {
                return Ok(None);
            };

            if answer.is_empty() {
                self.say("You need to pick a category!")?;
                continue;
            }

            match answer.parse::<usize>() {
                Ok(choice) => match Category::from_menu_choice(choice) {
                    Some(category) => return Ok(Some(category)),
                    None => self.say("Invalid choice. Please try again.")?,
                },
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Print `1. <label>` for every category
    pub fn list_categories(&mut self) -> ExpenseResult<()> {
        for (i, category) in Category::all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category)?;
        }
        Ok(())
    }
}

fn amount_complaint(error: &AmountInputError) -> String {
    match error {
        AmountInputError::Negative => "Nice try! Expenses can't be negative though. 😉".into(),
        AmountInputError::NotPositive => "C'mon, amount has to be positive!".into(),
        other => other.to_string(),
    }
}
