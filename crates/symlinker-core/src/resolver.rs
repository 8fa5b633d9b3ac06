use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::Error;
use crate::prompt::prompt_line;
use crate::scanner::{FileEntry, MatchSet};

/// Picks exactly one target for `name` out of `matches`.
///
/// No match is an error, a single match is taken as is, and several matches
/// are listed and the user is asked until a valid number is entered.
pub fn resolve<R: BufRead, W: Write>(
    name: &str,
    mut matches: MatchSet,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, Error> {
    match matches.len() {
        0 => Err(Error::NoMatch {
            name: name.to_string(),
        }),
        1 => Ok(matches.remove(0).path),
        _ => {
            writeln!(
                output,
                "\nMultiple files with the name '{}' were found:",
                name
            )?;
            for (i, entry) in matches.iter().enumerate() {
                writeln!(output, "[{}] {}", i + 1, entry.path.display())?;
            }
            let selected = select_candidate(&matches, input, output)?;
            Ok(selected.path.clone())
        }
    }
}

/// Re-prompts until the input names a member of `matches`. There is no retry limit.
pub fn select_candidate<'a, R: BufRead, W: Write>(
    matches: &'a [FileEntry],
    input: &mut R,
    output: &mut W,
) -> Result<&'a FileEntry, Error> {
    let prompt = format!(
        "Select the file to create a shortcut for (1-{}): ",
        matches.len()
    );
    loop {
        let line = prompt_line(input, output, &prompt)?;
        match parse_selection(&line, matches.len()) {
            Ok(index) => return Ok(&matches[index]),
            Err(err) => writeln!(output, "Error: {}", err)?,
        }
    }
}

/// Parses a 1-based selection and returns the 0-based index.
pub fn parse_selection(input: &str, max: usize) -> Result<usize, Error> {
    let invalid = || Error::InvalidSelection {
        input: input.to_string(),
        max,
    };
    let selection: usize = input.trim().parse().map_err(|_| invalid())?;
    if (1..=max).contains(&selection) {
        Ok(selection - 1)
    } else {
        Err(invalid())
    }
}
