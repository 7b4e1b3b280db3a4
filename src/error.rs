use core::fmt;
use std::{borrow::Cow, error, mem::replace};

#[derive(Clone, PartialEq)]
pub enum Error {
    /// A help token was encountered. Holds the rendered usage once the parser fills it in.
    Help(Option<String>),

    DuplicateName(Cow<'static, str>),
    InvalidName(Cow<'static, str>),
    InvalidPrefix(Cow<'static, str>),
    MissingDestination(Cow<'static, str>),
    InvalidCount(Cow<'static, str>),

    UnrecognizedArgument(Cow<'static, str>, Vec<(Cow<'static, str>, usize)>),
    MissingValue(Cow<'static, str>, &'static str),
    FailedToParseValue(Cow<'static, str>, Cow<'static, str>, &'static str),
    OutOfRange(Cow<'static, str>, Cow<'static, str>, &'static str, Bound),
    TooFewValues(Cow<'static, str>, usize, usize),
    TooManyValues(Cow<'static, str>, usize, usize),
    MissingRequired(Vec<String>),

    Format(fmt::Error),
}

/// The limit a numeric value crossed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    Minimum(Cow<'static, str>),
    Maximum(Cow<'static, str>),
}

/// A parse that did not complete. `value` holds every field assigned before the failure.
pub struct Failure<T> {
    pub value: T,
    pub error: Error,
}

impl error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Help(Some(help)) => write!(f, "{help}")?,
            Error::Help(None) => write!(f, "Missing help.")?,

            Error::DuplicateName(name) => write!(f, "Name '{name}' is already registered.")?,
            Error::InvalidName(name) => write!(f, "Invalid argument name '{name}'. A valid name is non-empty and does not spell a help token.")?,
            Error::InvalidPrefix(prefix) => write!(f, "Invalid prefix '{prefix}'. A valid prefix is non-empty and contains only non-alpha-numeric characters.")?,
            Error::MissingDestination(name) => write!(f, "Missing destination for argument '{name}'.")?,
            Error::InvalidCount(name) => write!(f, "Invalid count for argument '{name}'. A count applies to list destinations and its minimum must not exceed its maximum.")?,

            Error::UnrecognizedArgument(argument, suggestions) => {
                write!(f, "Unrecognized argument '{argument}'.")?;
                let suggestions = suggestions.iter().map(|(suggestion, _)| format!("'{suggestion}'"));
                write_join(f, " Similar matches: ", ".", ", ", suggestions)?;
            }
            Error::MissingValue(key, type_name) => {
                write!(f, "'{key}' expected a value of type '{type_name}'.")?
            }
            Error::FailedToParseValue(value, key, type_name) => write!(
                f,
                "'{key}' expected a string representing a '{type_name}' but instead found '{value}'."
            )?,
            Error::OutOfRange(value, key, type_name, bound) => {
                write!(f, "'{key}' value '{value}' is out of range for type '{type_name}'")?;
                match bound {
                    Bound::Minimum(limit) => write!(f, " (minimum {limit}).")?,
                    Bound::Maximum(limit) => write!(f, " (maximum {limit}).")?,
                }
            }
            Error::TooFewValues(key, minimum, count) => {
                write!(f, "'{key}' expected at least {minimum} values but found {count}.")?
            }
            Error::TooManyValues(key, maximum, count) => {
                write!(f, "'{key}' expected at most {maximum} values but found {count}.")?
            }
            Error::MissingRequired(signatures) => {
                write!(f, "Missing required arguments")?;
                let signatures = signatures.iter().map(|signature| format!("'{signature}'"));
                write_join(f, ": ", ".", ", ", signatures)?;
            }

            Error::Format(error) => fmt::Display::fmt(error, f)?,
        }
        Ok(())
    }
}

impl From<fmt::Error> for Error {
    fn from(error: fmt::Error) -> Self {
        Error::Format(error)
    }
}

impl<T> From<Failure<T>> for Error {
    fn from(failure: Failure<T>) -> Self {
        failure.error
    }
}

impl<T> error::Error for Failure<T> {}

impl<T> fmt::Debug for Failure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> fmt::Display for Failure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

fn write_join(
    formatter: &mut fmt::Formatter,
    prefix: impl fmt::Display,
    suffix: impl fmt::Display,
    separator: impl fmt::Display,
    items: impl IntoIterator<Item = impl fmt::Display>,
) -> Result<(), fmt::Error> {
    let mut has = false;
    for item in items.into_iter() {
        if replace(&mut has, true) {
            write!(formatter, "{separator}")?;
        } else {
            write!(formatter, "{prefix}")?;
        }
        write!(formatter, "{item}")?;
    }
    if has {
        write!(formatter, "{suffix}")?;
    }
    Ok(())
}
