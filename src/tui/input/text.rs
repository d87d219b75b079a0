use crate::util::unicode;

/// Editable text with a byte-offset cursor kept on grapheme boundaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// Buffer holding `text` with the cursor at the end
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        TextBuffer { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        match unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            Some(start) => {
                self.text.replace_range(start..self.cursor, "");
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    pub fn delete_forward(&mut self) -> bool {
        match unicode::next_grapheme_boundary(&self.text, self.cursor) {
            Some(end) => {
                self.text.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    pub fn delete_word_back(&mut self) -> bool {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        if start == self.cursor {
            return false;
        }
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    /// Start of the cursor's line
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    /// End of the cursor's line
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
    }

    /// Text before and after the cursor, for rendering a cursor glyph
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace() {
        let mut buf = TextBuffer::default();
        for c in "héllo".chars() {
            buf.insert(c);
        }
        assert_eq!(buf.as_str(), "héllo");
        assert!(buf.backspace());
        assert_eq!(buf.as_str(), "héll");
        assert_eq!(buf.cursor(), buf.as_str().len());
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut buf = TextBuffer::from_text("ab");
        buf.move_home();
        assert!(!buf.backspace());
        assert_eq!(buf.as_str(), "ab");
    }

    #[test]
    fn edits_in_the_middle() {
        let mut buf = TextBuffer::from_text("ac");
        buf.move_left();
        buf.insert('b');
        assert_eq!(buf.as_str(), "abc");
        assert!(buf.delete_forward());
        assert_eq!(buf.as_str(), "ab");
        assert!(!buf.delete_forward());
    }

    #[test]
    fn home_and_end_are_line_relative() {
        let mut buf = TextBuffer::from_text("one\ntwo");
        buf.move_home();
        assert_eq!(buf.cursor(), 4);
        buf.move_left();
        buf.move_home();
        assert_eq!(buf.cursor(), 0);
        buf.move_end();
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn delete_word_back_stops_at_whitespace() {
        let mut buf = TextBuffer::from_text("buy oat milk");
        assert!(buf.delete_word_back());
        assert_eq!(buf.as_str(), "buy oat ");
    }

    #[test]
    fn split_at_cursor() {
        let mut buf = TextBuffer::from_text("abc");
        buf.move_left();
        assert_eq!(buf.split_at_cursor(), ("ab", "c"));
    }
}
