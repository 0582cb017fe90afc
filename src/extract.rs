use std::io::{self, BufRead, Write};

/// A trace line is of interest when its very first character is one of
/// these. The check is against the raw line: indented lines never match.
pub const MARKERS: &[char] = &['I', 'S', 'L'];

/// Applies the per-line rule: a marker at position 0, at least two
/// whitespace-separated tokens, and the second token cut at its first comma
/// (or taken whole when it has none).
pub fn extract_address(line: &str) -> Option<&str> {
    if !line.starts_with(MARKERS) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    tokens.next()?;
    tokens.next()?.split(',').next()
}

/// Streams every line of `input` through the extraction rule, in order,
/// writing one address per matching line to `output`. Lines with a marker
/// but no second token are skipped. Returns how many lines were written.
pub fn extract_addresses<R, W>(input: R, mut output: W) -> io::Result<u64>
where
    R: BufRead,
    W: Write,
{
    let mut count = 0;

    for line in input.lines() {
        let line = line?;
        if let Some(address) = extract_address(&line) {
            writeln!(output, "{}", address)?;
            count += 1;
        }
    }

    output.flush()?;

    Ok(count)
}
