//! # Line Prompt
//!
//! Reads answers and shell commands line by line from an async reader.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Prompt<R> {
    lines: Lines<R>,
}

impl Prompt<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Prompt::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Prompt {
            lines: reader.lines(),
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }

    /// Prints `question` and reads the answer.
    pub async fn ask(&mut self, out: &mut impl Write, question: &str) -> io::Result<Option<String>> {
        write!(out, "{} ", question)?;
        out.flush()?;
        self.read_line().await
    }

    /// Yes/no question; anything but `y` or `yes` is a no, end of input too.
    pub async fn confirm(&mut self, out: &mut impl Write, question: &str) -> io::Result<bool> {
        let answer = self.ask(out, &format!("{} [y/N]", question)).await?;

        Ok(matches!(
            answer.map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_confirm_answers() {
        let mut prompt = Prompt::new(&b"y\n no \nYES\n\n"[..]);
        let mut out = Vec::new();

        assert!(prompt.confirm(&mut out, "Sure?").await.unwrap());
        assert!(!prompt.confirm(&mut out, "Sure?").await.unwrap());
        assert!(prompt.confirm(&mut out, "Sure?").await.unwrap());
        assert!(!prompt.confirm(&mut out, "Sure?").await.unwrap());
        // End of input declines.
        assert!(!prompt.confirm(&mut out, "Sure?").await.unwrap());

        assert!(String::from_utf8(out).unwrap().starts_with("Sure? [y/N] "));
    }

    #[tokio::test]
    async fn test_read_line_strips_terminator() {
        let mut prompt = Prompt::new(&b"search elec\r\nquit"[..]);
        assert_eq!(prompt.read_line().await.unwrap().as_deref(), Some("search elec"));
        assert_eq!(prompt.read_line().await.unwrap().as_deref(), Some("quit"));
        assert_eq!(prompt.read_line().await.unwrap(), None);
    }
}
