/// Longest entry the keypad accepts
pub const MAX_ENTRY: usize = 12;

/// Result of submitting the keypad entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Unlocked,
    Rejected,
}

/// Cosmetic lock-screen gate: a plain string comparison, not a security
/// boundary.
#[derive(Debug, Clone)]
pub struct PasscodeGate {
    code: String,
    entry: String,
}

impl PasscodeGate {
    pub fn new(code: impl Into<String>) -> Self {
        PasscodeGate {
            code: code.into(),
            entry: String::new(),
        }
    }

    /// Append a digit. Other characters and overlong entries are ignored.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.entry.len() >= MAX_ENTRY {
            return false;
        }
        self.entry.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.entry.pop();
    }

    pub fn clear(&mut self) {
        self.entry.clear();
    }

    /// Number of digits entered (the digits themselves are never shown)
    pub fn entry_len(&self) -> usize {
        self.entry.len()
    }

    /// Compare and clear the entry either way.
    pub fn submit(&mut self) -> Attempt {
        let attempt = if self.entry == self.code {
            Attempt::Unlocked
        } else {
            Attempt::Rejected
        };
        self.entry.clear();
        attempt
    }
}
