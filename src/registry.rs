use crate::{
    destination::{Count, Destination},
    error::Error,
    meta::Flags,
    HELP,
};
use std::{borrow::Cow, collections::HashMap};
use tracing::trace;

/// A registered argument: its name, help text, flags and destination, plus whether the
/// current parse has assigned it.
pub struct Argument<'a, T> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) help: Cow<'static, str>,
    pub(crate) flags: Flags,
    pub(crate) position: Option<usize>,
    pub(crate) destination: Destination<'a, T>,
    pub(crate) set: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    Named(usize),
    Position(usize),
}

pub struct Registry<'a, T> {
    pub(crate) optionals: Vec<Argument<'a, T>>,
    pub(crate) positionals: Vec<Argument<'a, T>>,
    pub(crate) indices: HashMap<Cow<'static, str>, Index>,
}

impl<'a, T> Argument<'a, T> {
    /// How the argument is spelled on the command line and in messages.
    pub fn key(&self, prefix: &str) -> Cow<'static, str> {
        match self.position {
            Some(_) => self.name.clone(),
            None => Cow::Owned(format!("{prefix}{}", self.name)),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(
            self.destination,
            Destination::Scalar(crate::destination::Slot::Bool(_))
        )
    }

    /// Parse level `REQUIRED` applies to everything but flags; a flag's absence is a value.
    pub fn is_required(&self, flags: Flags) -> bool {
        self.flags.contains(Flags::REQUIRED)
            || (flags.contains(Flags::REQUIRED) && !self.is_flag())
    }

    pub fn shows_default(&self, flags: Flags) -> bool {
        !self.flags.contains(Flags::NO_DEFAULT) && !flags.contains(Flags::NO_DEFAULT)
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(Flags::HIDE)
    }

    /// Applies list bounds. Fails if the destination is not a list or the bounds are inverted.
    pub fn count(&mut self, count: Count) -> Result<(), Error> {
        match &mut self.destination {
            Destination::List(_, bounds)
                if count.maximum.map_or(true, |maximum| count.minimum <= maximum) =>
            {
                *bounds = count;
                Ok(())
            }
            _ => Err(Error::InvalidCount(self.name.clone())),
        }
    }
}

impl<'a, T> Registry<'a, T> {
    pub fn new() -> Self {
        Self {
            optionals: Vec::new(),
            positionals: Vec::new(),
            indices: HashMap::new(),
        }
    }

    pub fn register(&mut self, argument: Argument<'a, T>) -> Result<(), Error> {
        if argument.name.is_empty() || HELP.contains(&&*argument.name) {
            return Err(Error::InvalidName(argument.name));
        }
        if self.indices.contains_key(&argument.name) {
            return Err(Error::DuplicateName(argument.name));
        }

        let index = match argument.position {
            Some(position) => Index::Position(position),
            None => Index::Named(self.optionals.len()),
        };
        trace!(name = %argument.name, ?index, "registered argument");
        self.indices.insert(argument.name.clone(), index);
        match index {
            Index::Named(_) => self.optionals.push(argument),
            Index::Position(_) => self.positionals.push(argument),
        }
        Ok(())
    }

    /// Checks optional names once the prefix is known.
    pub fn validate(&self, prefix: &str) -> Result<(), Error> {
        for argument in &self.optionals {
            if HELP.contains(&&*argument.key(prefix)) {
                return Err(Error::InvalidName(argument.name.clone()));
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        for argument in self.optionals.iter_mut().chain(self.positionals.iter_mut()) {
            argument.set = false;
        }
    }

    /// Positionals in order, then optionals in registration order.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument<'a, T>> {
        self.positionals.iter().chain(self.optionals.iter())
    }

    pub fn find(&self, name: &str) -> Option<&Argument<'a, T>> {
        match self.indices.get(name)? {
            Index::Named(index) => self.optionals.get(*index),
            Index::Position(index) => self.positionals.get(*index),
        }
    }
}
