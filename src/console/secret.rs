//! Rolling buffer that spots a secret code in typed characters.

/// The code that unlocks the secret bonus.
pub const SECRET_CODE: &str = "trickortreat";

/// Keeps the last `code.len()` printable characters typed.
///
/// ```
/// use rust_rps::console::SecretBuffer;
///
/// let mut buffer = SecretBuffer::default();
/// assert!(!buffer.push_str("xxtrickortrea"));
/// assert!(buffer.push('t'));
/// ```
#[derive(Clone, Debug)]
pub struct SecretBuffer {
    code: Vec<char>,
    typed: Vec<char>,
}

impl Default for SecretBuffer {
    fn default() -> Self {
        Self::new(SECRET_CODE)
    }
}

impl SecretBuffer {
    /// Watch for `code` (compared lowercase).
    pub fn new(code: &str) -> Self {
        let code: Vec<char> = code.to_lowercase().chars().collect();
        Self {
            typed: Vec::with_capacity(code.len()),
            code,
        }
    }

    /// Feed one character. Returns `true` when the code was just completed;
    /// the buffer is then cleared.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.code.is_empty() {
            return false;
        }
        self.typed.extend(c.to_lowercase());
        if self.typed.len() > self.code.len() {
            let excess = self.typed.len() - self.code.len();
            self.typed.drain(..excess);
        }
        if self.typed == self.code {
            self.typed.clear();
            return true;
        }
        false
    }

    /// Feed every character of `text`. Returns `true` if the code was
    /// completed at any point.
    pub fn push_str(&mut self, text: &str) -> bool {
        let mut hit = false;
        for c in text.chars() {
            hit |= self.push(c);
        }
        hit
    }

    pub fn clear(&mut self) {
        self.typed.clear();
    }
}
