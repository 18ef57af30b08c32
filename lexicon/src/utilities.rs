use std::io::{self, Write};

/// Prints the prompt and reads one line. `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

pub fn is_exit_command(line: &str) -> bool {
    matches!(line.trim(), ":q" | ":quit" | ":exit")
}
