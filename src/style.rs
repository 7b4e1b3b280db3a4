use self::color::*;
use crate::WIDTH;
use std::{borrow::Cow, fmt};
use termion::{
    color::{Color, Fg, Rgb},
    style::{Bold, Faint, Italic, Reset, Underline},
    terminal_size,
};

/// No escape sequences; the default.
pub struct Plain;
/// Colors usage text with `termion` escape sequences.
pub struct Colored;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Item {
    Usage,
    Argument,
    Description,
    Help,
    Default,
}

/// Something written into usage text. `width` is the number of columns it occupies.
pub trait Format {
    fn width(&self) -> usize;
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result;
}

pub trait Style {
    /// Column budget for wrapping.
    fn width(&self) -> usize;
    fn begin(&self, item: Item) -> &dyn Format;
    fn end(&self, item: Item) -> &dyn Format;
}

/// Adapts a [`Format`] to `Display`.
pub struct Show<'a>(pub &'a dyn Format);

macro_rules! escape {
    ($($type: ty),*) => {
        $(
            impl Format for $type {
                #[inline]
                fn width(&self) -> usize {
                    0
                }

                #[inline]
                fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    fmt::Display::fmt(self, formatter)
                }
            }
        )*
    };
}

escape!(Reset, Bold, Faint, Italic, Underline);

impl<C: Color> Format for Fg<C> {
    #[inline]
    fn width(&self) -> usize {
        0
    }

    #[inline]
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

impl Format for char {
    #[inline]
    fn width(&self) -> usize {
        1
    }

    #[inline]
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Write::write_char(formatter, *self)
    }
}

impl Format for str {
    #[inline]
    fn width(&self) -> usize {
        self.chars().count()
    }

    #[inline]
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self)
    }
}

impl Format for String {
    #[inline]
    fn width(&self) -> usize {
        self.as_str().width()
    }

    #[inline]
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self)
    }
}

impl Format for Cow<'_, str> {
    #[inline]
    fn width(&self) -> usize {
        Format::width(&**self)
    }

    #[inline]
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self)
    }
}

impl<T: Format + ?Sized> Format for &T {
    #[inline]
    fn width(&self) -> usize {
        T::width(self)
    }

    #[inline]
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        T::format(self, formatter)
    }
}

impl<T: Format> Format for [T] {
    #[inline]
    fn width(&self) -> usize {
        self.iter().map(Format::width).sum()
    }

    #[inline]
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for item in self {
            item.format(formatter)?;
        }
        Ok(())
    }
}

impl fmt::Display for Show<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format(f)
    }
}

const USAGE: &[&dyn Format] = &[&Bold, &Underline, &Fg(VIOLET)];
const ARGUMENT: &[&dyn Format] = &[&Fg(TURQUOISE)];
const DESCRIPTION: &[&dyn Format] = &[&Fg(SALMON_PINK)];
const HELP: &[&dyn Format] = &[&Fg(PEACH)];
const DEFAULT: &[&dyn Format] = &[&Faint, &Italic, &Fg(SILVER_GRAY)];
const RESET: &[&dyn Format] = &[&Reset];
const EMPTY: &str = "";

impl Style for Colored {
    #[inline]
    fn width(&self) -> usize {
        terminal_size().map_or(WIDTH, |(columns, _)| usize::from(columns).min(WIDTH))
    }

    #[inline]
    fn begin(&self, item: Item) -> &dyn Format {
        match item {
            Item::Usage => &USAGE,
            Item::Argument => &ARGUMENT,
            Item::Description => &DESCRIPTION,
            Item::Help => &HELP,
            Item::Default => &DEFAULT,
        }
    }

    #[inline]
    fn end(&self, _: Item) -> &dyn Format {
        &RESET
    }
}

impl Style for Plain {
    #[inline]
    fn width(&self) -> usize {
        WIDTH
    }

    #[inline]
    fn begin(&self, _: Item) -> &dyn Format {
        &EMPTY
    }

    #[inline]
    fn end(&self, _: Item) -> &dyn Format {
        &EMPTY
    }
}

pub mod color {
    use super::*;

    pub const TURQUOISE: Rgb = Rgb(64, 224, 208);
    pub const SILVER_GRAY: Rgb = Rgb(169, 169, 169);
    pub const VIOLET: Rgb = Rgb(238, 130, 238);
    pub const PEACH: Rgb = Rgb(255, 218, 185);
    pub const SALMON_PINK: Rgb = Rgb(255, 145, 164);
}
