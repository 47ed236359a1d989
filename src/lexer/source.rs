use std::{collections::VecDeque, io::BufRead};

/// Buffered character stream with unlimited pushback.
///
/// `None` is the end-of-stream sentinel; once the reader is exhausted it is
/// returned on every call without touching the reader again.
pub struct CharacterSource<R> {
    reader: R,
    pending: VecDeque<char>,
    exhausted: bool,
}

impl<R: BufRead> CharacterSource<R> {
    pub fn new(reader: R) -> Self {
        CharacterSource {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Pulls one line from the reader, only when nothing is pending.
    fn fill(&mut self) -> std::io::Result<()> {
        if !self.pending.is_empty() || self.exhausted {
            return Ok(());
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.exhausted = true;
        } else {
            self.pending.extend(line.chars());
        }

        Ok(())
    }

    pub fn peek(&mut self) -> std::io::Result<Option<char>> {
        self.fill()?;
        Ok(self.pending.front().copied())
    }

    pub fn read(&mut self) -> std::io::Result<Option<char>> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }

    /// Pushes `text` back so the next reads return it in its original order.
    ///
    /// # Panics
    ///
    /// Panics if `text` is empty.
    pub fn put_back(&mut self, text: &str) {
        assert!(
            !text.is_empty(),
            "empty string cannot be put back into the character source"
        );

        for c in text.chars().rev() {
            self.pending.push_front(c);
        }
    }
}
