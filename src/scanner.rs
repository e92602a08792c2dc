/// A cursor over a command string used by the grammar recognizers.
///
/// Every matching method returns `Some` and advances on success, or returns
/// `None` without moving, so recognizers can chain them with `?`.
pub struct Scanner {
    /// The input string stored as a vector of characters for easy iteration.
    input: Vec<char>,
    /// The current position in the character vector.
    position: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    // --- Navigation Helpers ---

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Checks if the cursor has reached the end of the input.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    // --- Matching ---

    /// Matches `word` case-insensitively.
    pub fn keyword(&mut self, word: &str) -> Option<()> {
        let mut end = self.position;
        for expected in word.chars() {
            let found = *self.input.get(end)?;
            if !found.eq_ignore_ascii_case(&expected) {
                return None;
            }
            end += 1;
        }
        self.position = end;
        Some(())
    }

    /// Matches exactly the character `ch`.
    pub fn char(&mut self, ch: char) -> Option<()> {
        if self.current_char()? != ch {
            return None;
        }
        self.position += 1;
        Some(())
    }

    /// Consumes a run of space characters and returns its length.
    pub fn spaces(&mut self) -> usize {
        let start = self.position;
        while self.current_char() == Some(' ') {
            self.position += 1;
        }
        self.position - start
    }

    /// Consumes a run of at least one space.
    pub fn spaces1(&mut self) -> Option<()> {
        (self.spaces() > 0).then_some(())
    }

    /// Consumes the longest non-empty run of characters accepted by `pred`.
    pub fn take_while1(&mut self, pred: impl Fn(char) -> bool) -> Option<String> {
        let start = self.position;
        while self.current_char().is_some_and(&pred) {
            self.position += 1;
        }
        if self.position == start {
            return None;
        }
        Some(self.input[start..self.position].iter().collect())
    }

    /// Matches trailing spaces followed by the end of the input.
    pub fn end(&mut self) -> Option<()> {
        let start = self.position;
        self.spaces();
        if !self.is_at_end() {
            self.position = start;
            return None;
        }
        Some(())
    }

    /// Consumes and returns everything left.
    pub fn rest(&mut self) -> String {
        let rest = self.input[self.position..].iter().collect();
        self.position = self.input.len();
        rest
    }
}

/// `\w`: ASCII letters, digits and underscore.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

pub fn is_alphanumeric(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_case_insensitive() {
        let mut scanner = Scanner::new("CrEaTe");
        assert_eq!(scanner.keyword("create"), Some(()));
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_failed_match_does_not_advance() {
        let mut scanner = Scanner::new("crate x");
        assert_eq!(scanner.keyword("create"), None);
        assert_eq!(scanner.keyword("crate"), Some(()));
        assert_eq!(scanner.char('('), None);
        assert_eq!(scanner.spaces1(), Some(()));
        assert_eq!(scanner.rest(), "x");
    }

    #[test]
    fn test_keyword_past_end() {
        let mut scanner = Scanner::new("list");
        assert_eq!(scanner.keyword("listing"), None);
        assert_eq!(scanner.rest(), "list");
    }

    #[test]
    fn test_spaces() {
        let mut scanner = Scanner::new("   a");
        assert_eq!(scanner.spaces(), 3);
        assert_eq!(scanner.spaces(), 0);
        assert_eq!(scanner.spaces1(), None);
    }

    #[test]
    fn test_take_while1() {
        let mut scanner = Scanner::new("my_db1 rest");
        assert_eq!(scanner.take_while1(is_alphanumeric), Some("my".into()));
        assert_eq!(scanner.take_while1(is_alphanumeric), None);
        assert_eq!(scanner.take_while1(is_word_char), Some("_db1".into()));
        assert_eq!(scanner.end(), None);
        assert_eq!(scanner.rest(), " rest");
        assert_eq!(scanner.end(), Some(()));
    }
}
