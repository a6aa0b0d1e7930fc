use std::io::{self, BufRead, Write};

use ryonkt_core::ports::Confirm;

/// A `Confirm` implementation that asks on the terminal.
///
/// With `assume_yes` (the `--yes` flag) nothing is asked. A read error or
/// anything other than `y`/`yes` counts as a refusal.
#[derive(Debug, Clone, Copy)]
pub struct StdinConfirm {
  assume_yes: bool,
}

impl StdinConfirm {
  pub fn new(assume_yes: bool) -> Self {
    Self { assume_yes }
  }
}

impl Confirm for StdinConfirm {
  fn confirm(&self, prompt: &str) -> bool {
    if self.assume_yes {
      return true;
    }

    // The prompt goes to stderr so stdout stays pipe-friendly.
    let mut stderr = io::stderr();
    let _ = write!(stderr, "{prompt} [y/N] ");
    let _ = stderr.flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
      Ok(_) => is_yes(&answer),
      Err(_) => false,
    }
  }
}

fn is_yes(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
