use crate::style::{Format, Item, Plain, Show, Style};
use core::fmt::{self, Write};

const CAPACITY: usize = 256;

/// Growable text buffer that wraps at a column budget and tracks the length of the
/// current line. Escape sequences from the [`Style`] do not count toward line length.
pub struct Text<'s> {
    buffer: String,
    line: usize,
    width: usize,
    style: &'s dyn Style,
}

impl Default for Text<'static> {
    fn default() -> Self {
        Self::new(&Plain)
    }
}

impl<'s> Text<'s> {
    pub fn new(style: &'s dyn Style) -> Self {
        Self {
            buffer: String::with_capacity(CAPACITY),
            line: 0,
            width: style.width(),
            style,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[inline]
    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn newline(&mut self, count: usize) {
        for _ in 0..count {
            self.buffer.push('\n');
        }
        if count > 0 {
            self.line = 0;
        }
    }

    pub fn space(&mut self, count: usize) {
        for _ in 0..count {
            self.buffer.push(' ');
        }
        self.line += count;
    }

    /// Appends `unit` without ever splitting it. If it would cross the column budget and
    /// the line already holds more than its indentation, the unit moves to a fresh line
    /// indented by `indent`. A unit wider than the budget overflows instead.
    pub fn atomic(&mut self, indent: usize, item: Item, unit: &str) -> fmt::Result {
        let width = unit.chars().count();
        if self.line + width > self.width && self.line > indent {
            self.newline(1);
            self.space(indent);
        }
        self.begin(item)?;
        self.buffer.push_str(unit);
        self.line += width;
        self.end(item)
    }

    /// Appends prose, breaking lines only between words. Spaces and tabs are break
    /// opportunities and the whitespace at a break or at the end of a line is dropped. A newline in `text` is kept
    /// as is: it ends the line without adding a break of its own and the next line starts
    /// at `indent`.
    pub fn natural(&mut self, indent: usize, item: Item, text: &str) -> fmt::Result {
        self.begin(item)?;
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.newline(1);
                self.space(indent);
            }

            let mut rest = line;
            while !rest.is_empty() {
                let start = rest.find(|letter: char| !blank(letter)).unwrap_or(rest.len());
                let end = rest[start..].find(blank).map_or(rest.len(), |end| start + end);
                let (gap, word) = (&rest[..start], &rest[start..end]);
                if word.is_empty() {
                    break;
                }
                let width = gap.chars().count() + word.chars().count();
                if self.line + width > self.width && self.line > indent {
                    self.newline(1);
                    self.space(indent);
                } else {
                    self.buffer.push_str(gap);
                    self.line += gap.chars().count();
                }
                self.buffer.push_str(word);
                self.line += word.chars().count();
                rest = &rest[end..];
            }
        }
        self.end(item)
    }

    fn begin(&mut self, item: Item) -> fmt::Result {
        let style = self.style;
        self.write(style.begin(item))
    }

    fn end(&mut self, item: Item) -> fmt::Result {
        let style = self.style;
        self.write(style.end(item))
    }

    fn write(&mut self, format: &dyn Format) -> fmt::Result {
        self.line += format.width();
        write!(self.buffer, "{}", Show(format))
    }
}

#[inline]
fn blank(letter: char) -> bool {
    letter == ' ' || letter == '\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines<'a>(text: &'a Text<'_>) -> Vec<&'a str> {
        text.as_str().split('\n').collect()
    }

    #[test]
    fn atomic_moves_unit_to_next_line() -> fmt::Result {
        let mut text = Text::default().with_width(20);
        assert_eq!(text.width(), 20);
        text.atomic(0, Item::Usage, "usage: tool")?;
        text.atomic(11, Item::Argument, " [-alpha <int>]")?;
        text.atomic(11, Item::Argument, " [-beta <int>]")?;
        assert_eq!(
            lines(&text),
            ["usage: tool [-alpha <int>]", "            [-beta <int>]"]
        );
        assert_eq!(text.line(), 25);
        Ok(())
    }

    #[test]
    fn atomic_overflows_rather_than_splitting() -> fmt::Result {
        let mut text = Text::default().with_width(8);
        text.atomic(2, Item::Argument, "abcdefghijkl")?;
        text.atomic(2, Item::Argument, "mnopqrstuvwx")?;
        assert_eq!(lines(&text), ["abcdefghijkl", "  mnopqrstuvwx"]);
        Ok(())
    }

    #[test]
    fn natural_breaks_at_whitespace() -> fmt::Result {
        let mut text = Text::default().with_width(16);
        text.natural(2, Item::Help, "one two three four five six")?;
        assert_eq!(lines(&text), ["one two three", "  four five six"]);
        Ok(())
    }

    #[test]
    fn natural_keeps_literal_newlines() -> fmt::Result {
        let mut text = Text::default().with_width(80);
        text.atomic(0, Item::Argument, "    -mode: ")?;
        text.natural(11, Item::Help, "Pick one:\n1. Fast\n2. Slow")?;
        assert_eq!(
            lines(&text),
            ["    -mode: Pick one:", "           1. Fast", "           2. Slow"]
        );
        assert_eq!(text.line(), 18);
        Ok(())
    }

    #[test]
    fn natural_continues_after_atomic() -> fmt::Result {
        let mut text = Text::default().with_width(28);
        text.atomic(0, Item::Argument, "    -count <int>: ")?;
        text.natural(18, Item::Help, "Number of times")?;
        assert_eq!(
            lines(&text),
            ["    -count <int>: Number of", "                  times"]
        );
        Ok(())
    }
}
