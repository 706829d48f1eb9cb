//! Interactive prompt helpers.
//!
//! All stdin reading lives here; the core library only ever sees the
//! collected values and confirmation closures built from [`confirm`].

use std::io::{self, Write};

use colored::Colorize;
use museum::ExhibitStatus;

/// Print a prompt and read one trimmed line.
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt until a non-empty value is entered.
pub fn required(label: &str) -> io::Result<String> {
    loop {
        let value = read_line(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("{}", "This field must not be empty.".yellow());
    }
}

/// Prompt showing the current value; empty input means "keep".
pub fn optional(label: &str, current: &str) -> io::Result<Option<String>> {
    let value = read_line(&format!("{} [{}]", label, current))?;
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Select a status by ordinal, re-prompting until the choice is valid.
///
/// With `allow_keep`, empty input returns `None` ("keep current").
pub fn select_status(allow_keep: bool) -> io::Result<Option<ExhibitStatus>> {
    println!("Status:");
    for (i, status) in ExhibitStatus::ALL.iter().enumerate() {
        println!("  [{}] {}", i + 1, status.label());
    }

    loop {
        let label = if allow_keep {
            "Choice (empty keeps current)"
        } else {
            "Choice"
        };
        let input = read_line(label)?;

        if input.is_empty() {
            if allow_keep {
                return Ok(None);
            }
            println!("{}", "Please choose one of the listed numbers.".yellow());
            continue;
        }

        match input.parse::<usize>() {
            Ok(n) if (1..=ExhibitStatus::ALL.len()).contains(&n) => {
                return Ok(Some(ExhibitStatus::ALL[n - 1]));
            }
            _ => println!("{}", "Please choose one of the listed numbers.".yellow()),
        }
    }
}

/// Yes/no confirmation; anything but `j`/`y` counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
    let answer = read_line(&format!("{} (j/n)", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "j" | "ja" | "y" | "yes"))
}
