use std::io::{BufRead, Write};

use crate::error::Error;

/// Writes `prompt`, then reads one line and returns it trimmed.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
/// End of input is reported as [`Error::InputClosed`].
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, Error> {
    let mut line = Vec::new();

    write!(output, "{}", prompt)?;
    output.flush()?; // Make sure the prompt is immediately displayed

    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}
