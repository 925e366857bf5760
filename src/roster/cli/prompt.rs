use std::io::{self, BufRead, Write};

/// Asks a yes/no question on stdout and reads the answer from `input`.
///
/// Anything other than `y`/`yes` (including end of input or a read error) is a no.
pub(super) fn confirm<I>(question: &str, input: &mut I) -> bool
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{} [y/N] ", question);
    let _ = io::stdout().flush();

    match input.next() {
        Some(Ok(answer)) => is_yes(&answer),
        _ => {
            println!();
            false
        }
    }
}

/// Confirmation for one-shot commands, reading a single line from stdin.
pub(super) fn confirm_stdin(question: &str) -> bool {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    confirm(question, &mut lines)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
