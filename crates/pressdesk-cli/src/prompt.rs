use std::io::{self, BufRead, Write};

use pressdesk_runtime::Decision;

/// Print `message` to stderr and read a yes/no answer from stdin.
///
/// Only `y` or `yes` (any case) confirms; EOF or anything else cancels.
pub fn confirm(message: &str) -> io::Result<Decision> {
    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N] ", message)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}

fn parse_answer(answer: &str) -> Decision {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Decision::Confirm,
        _ => Decision::Cancel,
    }
}
