use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Reads the answer from standard input. EOF counts as "no".
#[derive(Default, Debug, Clone)]
pub struct StdinPrompt {}

impl Prompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{question} (y/n): ");
        if let Err(e) = io::stdout().flush() {
            log::warn!("failed to flush stdout: {e}");
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                log::warn!("failed to read answer: {e}");
                false
            }
        }
    }
}

/// Answers yes without asking.
#[derive(Default, Debug, Clone)]
pub struct AssumeYes {}

impl Prompt for AssumeYes {
    fn confirm(&mut self, question: &str) -> bool {
        log::info!("{question} -> yes (assumed)");
        true
    }
}

impl<F: FnMut(&str) -> bool> Prompt for F {
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
