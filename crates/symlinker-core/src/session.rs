use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::Error;
use crate::manager::LinkManager;
use crate::progress::ProgressReporter;
use crate::prompt::prompt_line;
use crate::resolver;

const MENU_PROMPT: &str = "Select an option (1-4) or type 'quit': ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Delete,
    Report,
    Quit,
}

impl MenuChoice {
    /// Accepts `1`-`4` or `quit`, ignoring case and surrounding blanks.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(MenuChoice::Create),
            "2" => Some(MenuChoice::Delete),
            "3" => Some(MenuChoice::Report),
            "4" | "quit" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Interactive menu loop. Every action runs to completion before the next
/// prompt; action errors are printed and the menu is shown again.
pub struct Session<'a, R, W> {
    manager: &'a LinkManager,
    reporter: &'a dyn ProgressReporter,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        manager: &'a LinkManager,
        reporter: &'a dyn ProgressReporter,
        input: R,
        output: W,
    ) -> Self {
        Self {
            manager,
            reporter,
            input,
            output,
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            self.print_menu()?;

            let line = match prompt_line(&mut self.input, &mut self.output, MENU_PROMPT) {
                Ok(line) => line,
                Err(Error::InputClosed) => return Ok(()),
                Err(err) => return Err(err),
            };

            let choice = match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Invalid selection. Please try again.")?;
                    continue;
                }
            };

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(Error::InputClosed) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    debug!("{:?} action failed: {}", choice, err);
                    writeln!(self.output, "Error: {}", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<(), Error> {
        match choice {
            MenuChoice::Create => {
                writeln!(self.output, "\n=== Create Symbolic Link ===")?;
                let name = prompt_line(
                    &mut self.input,
                    &mut self.output,
                    "Enter the name of the file to create a symbolic link for: ",
                )?;
                self.create_named(&name)
            }
            MenuChoice::Delete => {
                writeln!(self.output, "\n=== Delete Symbolic Link ===")?;
                let name = prompt_line(
                    &mut self.input,
                    &mut self.output,
                    "Enter the name of the symbolic link to delete: ",
                )?;
                self.delete_named(&name)
            }
            MenuChoice::Report => {
                writeln!(self.output, "\n=== Symbolic Link Report ===")?;
                self.report()
            }
            MenuChoice::Quit => Ok(()),
        }
    }

    /// Search, disambiguate, then link into the destination directory.
    pub fn create_named(&mut self, name: &str) -> Result<(), Error> {
        let name = name.trim();
        let matches = self.manager.find_candidates(name, self.reporter)?;
        let target = resolver::resolve(name, matches, &mut self.input, &mut self.output)?;
        let request = self.manager.create(name, target)?;
        writeln!(
            self.output,
            "Shortcut created on Desktop → {}",
            request.link_path.display()
        )?;
        Ok(())
    }

    pub fn delete_named(&mut self, name: &str) -> Result<(), Error> {
        let link_path = self.manager.delete(name.trim())?;
        writeln!(self.output, "Deleted symbolic link: {}", link_path.display())?;
        Ok(())
    }

    /// Shows the report, then persists it. A failed write does not retract
    /// what was shown.
    pub fn report(&mut self) -> Result<(), Error> {
        let report = self.manager.build_report(self.reporter);
        if !report.is_empty() {
            writeln!(self.output)?;
        }
        write!(self.output, "{}", report)?;

        let saved_to = self.manager.write_report(&report)?;
        writeln!(self.output, "\nReport saved to: {}", saved_to.display())?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), Error> {
        writeln!(self.output, "\n===============================")?;
        writeln!(self.output, "     SYMBOLIC LINK MANAGER     ")?;
        writeln!(self.output, "===============================")?;
        writeln!(self.output, "[1] Create a symbolic link")?;
        writeln!(self.output, "[2] Delete a symbolic link")?;
        writeln!(self.output, "[3] Generate a symbolic link report")?;
        writeln!(self.output, "[4] Quit")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Create));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Report));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("QUIT"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("create"), None);
    }
}
