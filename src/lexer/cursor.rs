//! Character cursor with line accounting.
//!
//! Carriage returns are dropped up front so they are never returned and never
//! counted; a `\r\n` pair therefore advances the line exactly once.

pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: u32,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().filter(|c| *c != '\r').collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Current 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Looks `offset` characters ahead without consuming anything.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn at(&self) -> Option<char> {
        self.peek(0)
    }

    pub fn next_is(&self, c: char) -> bool {
        self.at() == Some(c)
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds, appending them to `buf`.
    pub fn eat_while(&mut self, buf: &mut String, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.at() {
            if !predicate(c) {
                break;
            }
            buf.push(c);
            self.bump();
        }
    }
}
