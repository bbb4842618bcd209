use std::fs;
use std::path::Path;

use tracing::debug;

use crate::deque::Deque;
use crate::error::Result;

/// Reverses the order of `lines`
///
/// Lines are expected to carry their own terminators, as produced by
/// [`split_lines`]. The first emitted line (the last input line) gets a `\n`
/// appended. The last emitted line (the first input line) has its trailing
/// `\n`s stripped. Lines in between are emitted unchanged.
///
/// A single input line is both first and last: it is stripped, then terminated.
pub fn reverse_lines<I, S>(lines: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut deque: Deque<String> = Deque::new();
    for line in lines {
        deque.appendleft(line);
    }

    let count = deque.len();
    let mut out = Vec::with_capacity(count);
    if count == 0 {
        return Ok(out);
    }
    if count == 1 {
        let line = deque.popleft()?;
        out.push(format!("{}\n", line.trim_end_matches('\n')));
        return Ok(out);
    }

    let mut first = deque.popleft()?;
    first.push('\n');
    out.push(first);

    while deque.len() > 1 {
        out.push(deque.popleft()?);
    }

    let last = deque.popleft()?;
    out.push(last.trim_end_matches('\n').to_string());

    Ok(out)
}

/// Splits `contents` into lines, each keeping its `\n` terminator
/// The last line has no terminator if `contents` does not end with one.
pub fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.split_inclusive('\n')
}

/// Writes the lines of `input`, reversed, to `output`
///
/// The input is read whole and the output written whole, only once reversal
/// has succeeded, so a failure never leaves a partial output file behind.
pub fn reverse_file(input: &Path, output: &Path) -> Result<()> {
    let contents = fs::read_to_string(input)?;
    debug!(path = %input.display(), bytes = contents.len(), "read input");

    let reversed = reverse_lines(split_lines(&contents))?;
    debug!(lines = reversed.len(), "reversed lines");

    fs::write(output, reversed.concat())?;
    debug!(path = %output.display(), "wrote output");

    Ok(())
}
