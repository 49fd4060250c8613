//! Lazy whitespace tokenizer over a line-oriented reader.
//!
//! Lines are pulled only when the pending tokens run out, so prompts written
//! between figure reads interleave correctly with interactive input.

use std::collections::VecDeque;
use std::io::BufRead;

pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Some(t);
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(e) => {
                    tracing::warn!(error = %e, "stdin read failed");
                    return None;
                }
            }
        }
    }
}
