//! Single-line text input with a character limit

/// Text buffer that refuses input past `max_chars`
///
/// Length is counted in `char`s, so multi-byte letters count once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    max_chars: usize,
}

impl TextInput {
    pub fn new(max_chars: usize) -> Self {
        Self {
            value: String::new(),
            max_chars,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Append a character; returns false when it was refused
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.len() >= self.max_chars {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Replace the contents, dropping whatever exceeds the limit
    pub fn set(&mut self, value: &str) {
        self.value = value.chars().take(self.max_chars).collect();
    }
}
