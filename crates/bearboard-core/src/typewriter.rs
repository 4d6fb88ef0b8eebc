//! Typewriter greeting shown before a key is entered.

/// Lines typed out on the landing view.
pub const GREETING: [&str; 3] = ["Welcome", "to", "Agentic AI Dashboard"];

/// Character-by-character reveal of a fixed set of lines.
#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<Vec<char>>,
    line: usize,
    chars: usize,
}

/// What to render after one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    /// Text typed so far, one entry per line.
    pub lines: Vec<String>,
    /// Line carrying the cursor, `None` once typing is done.
    pub cursor: Option<usize>,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().chars().collect()).collect(),
            line: 0,
            chars: 0,
        }
    }

    pub fn greeting() -> Self {
        Self::new(&GREETING)
    }

    pub fn is_done(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Type one more character. Empty lines are skipped.
    pub fn tick(&mut self) -> TypewriterFrame {
        while !self.is_done() && self.chars >= self.lines[self.line].len() {
            self.line += 1;
            self.chars = 0;
        }
        if !self.is_done() {
            self.chars += 1;
            if self.chars == self.lines[self.line].len() {
                self.line += 1;
                self.chars = 0;
            }
        }
        self.frame()
    }

    pub fn frame(&self) -> TypewriterFrame {
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i < self.line {
                    line.iter().collect()
                } else if i == self.line {
                    line[..self.chars].iter().collect()
                } else {
                    String::new()
                }
            })
            .collect();
        TypewriterFrame {
            lines,
            cursor: (!self.is_done()).then_some(self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_line_by_line() {
        let mut tw = Typewriter::new(&["ab", "c"]);
        assert_eq!(tw.tick().lines, vec!["a", ""]);
        let frame = tw.tick();
        assert_eq!(frame.lines, vec!["ab", ""]);
        assert_eq!(frame.cursor, Some(1));
        let frame = tw.tick();
        assert_eq!(frame.lines, vec!["ab", "c"]);
        assert_eq!(frame.cursor, None);
        assert!(tw.is_done());
    }

    #[test]
    fn test_greeting_tick_count() {
        let mut tw = Typewriter::greeting();
        let total: usize = GREETING.iter().map(|l| l.chars().count()).sum();
        for _ in 0..total {
            tw.tick();
        }
        assert!(tw.is_done());
        assert_eq!(tw.frame().lines, GREETING.to_vec());
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let mut tw = Typewriter::new(&["", "x"]);
        assert_eq!(tw.tick().lines, vec!["", "x"]);
        assert!(tw.is_done());
    }
}
