//! Display-width-aware word wrapping for message bodies.
//!
//! Widths are measured in terminal columns with `unicode-width`, so CJK
//! characters and emoji occupy two columns while combining marks occupy none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` so that no returned line is wider than `max_width` columns.
///
/// Existing line breaks are kept, including empty lines. Lines wrap at
/// whitespace; a single word wider than `max_width` is broken between
/// characters. Runs of whitespace at a wrap point are dropped.
///
/// A `max_width` of zero disables wrapping.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(str::to_owned).collect();
    }

    text.lines()
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}

fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if line.width() <= max_width {
        return vec![line.to_owned()];
    }

    let mut builder = LineBuilder::new(max_width);
    for word in line.split_whitespace() {
        builder.push_word(word);
    }
    builder.finish()
}

/// Accumulates words into lines of bounded display width.
struct LineBuilder {
    max_width: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
}

impl LineBuilder {
    const fn new(max_width: usize) -> Self {
        Self {
            max_width,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn push_word(&mut self, word: &str) {
        let word_width = word.width();

        if self.current_width > 0 && self.current_width + 1 + word_width > self.max_width {
            self.break_line();
        }

        if word_width > self.max_width {
            self.push_long_word(word);
            return;
        }

        if self.current_width > 0 {
            self.current.push(' ');
            self.current_width += 1;
        }
        self.current.push_str(word);
        self.current_width += word_width;
    }

    fn push_long_word(&mut self, word: &str) {
        for ch in word.chars() {
            let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if self.current_width + char_width > self.max_width && self.current_width > 0 {
                self.break_line();
            }
            self.current.push(ch);
            self.current_width += char_width;
        }
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

#[cfg(test)]
#[path = "text_wrap_tests.rs"]
mod tests;
