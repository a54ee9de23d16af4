//! Interactive console mode
//!
//! A numbered menu driven by line input. Prompts reprompt on invalid answers
//! rather than failing.

mod menu;
mod prompt;

pub use menu::MenuSession;
pub use prompt::Prompter;
