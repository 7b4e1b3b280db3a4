use crate::{
    composite::{Aggregate, Composite},
    destination::{Accept, Count, Destination, Place},
    error::Error,
    meta::Flags,
    parse::Parser,
    registry::{Argument, Registry},
    scope::{Named, Positional, Scope},
    style::{Plain, Style},
    PREFIX,
};
use std::{
    borrow::Cow,
    marker::PhantomData,
    ops::{Bound, RangeBounds},
};

/// Registers arguments and builds a [`Parser`]. Configuration mistakes are kept until
/// [`Builder::build`] reports the first one.
pub struct Builder<'a, T> {
    name: Cow<'static, str>,
    description: Cow<'static, str>,
    prefix: Cow<'static, str>,
    style: Box<dyn Style>,
    registry: Result<Registry<'a, T>, Error>,
}

/// Describes a single argument inside [`Builder::optional`] or [`Builder::positional`].
pub struct Declaration<'a, T, S> {
    name: Option<Cow<'static, str>>,
    help: Cow<'static, str>,
    flags: Flags,
    count: Option<Count>,
    destination: Option<Destination<'a, T>>,
    error: Option<Error>,
    _marker: PhantomData<S>,
}

impl<'a, T: 'a> Default for Builder<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: 'a> Builder<'a, T> {
    pub fn new() -> Self {
        Self {
            name: Cow::Borrowed(""),
            description: Cow::Borrowed(""),
            prefix: Cow::Borrowed(PREFIX),
            style: Box::new(Plain),
            registry: Ok(Registry::new()),
        }
    }

    /// Program name shown in the usage line. Defaults to the first command-line token.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }

    /// Text that introduces an optional argument's name. Defaults to `-`.
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn style(mut self, style: impl Style + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn optional(
        self,
        declare: impl FnOnce(Declaration<'a, T, Named>) -> Declaration<'a, T, Named>,
    ) -> Self {
        self.declare(declare(Declaration::new()))
    }

    pub fn positional(
        self,
        declare: impl FnOnce(Declaration<'a, T, Positional>) -> Declaration<'a, T, Positional>,
    ) -> Self {
        self.declare(declare(Declaration::new()))
    }

    pub fn build(self) -> Result<Parser<'a, T>, Error> {
        let registry = self.registry?;
        if self.prefix.is_empty() || self.prefix.chars().any(char::is_alphanumeric) {
            return Err(Error::InvalidPrefix(self.prefix));
        }
        registry.validate(&self.prefix)?;
        Ok(Parser {
            name: self.name,
            description: self.description,
            prefix: self.prefix,
            style: self.style,
            registry,
        })
    }

    fn declare<S: Scope>(mut self, declaration: Declaration<'a, T, S>) -> Self {
        self.registry = self.registry.and_then(|mut registry| {
            let ordinal = registry.positionals.len();
            let argument = declaration.finish(ordinal)?;
            registry.register(argument)?;
            Ok(registry)
        });
        self
    }
}

impl<'a, T: 'a, S: Scope> Declaration<'a, T, S> {
    fn new() -> Self {
        Self {
            name: None,
            help: Cow::Borrowed(""),
            flags: Flags::NONE,
            count: None,
            destination: None,
            error: None,
            _marker: PhantomData,
        }
    }

    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = help.into();
        self
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn require(self) -> Self {
        self.flags(Flags::REQUIRED)
    }

    pub fn hide(self) -> Self {
        self.flags(Flags::HIDE)
    }

    /// Bounds the number of values a list destination accepts, e.g. `2..=5` or `1..`.
    pub fn count(mut self, range: impl RangeBounds<usize>) -> Self {
        let minimum = match range.start_bound() {
            Bound::Included(&minimum) => Some(minimum),
            Bound::Excluded(&minimum) => minimum.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let maximum = match range.end_bound() {
            Bound::Included(&maximum) => Some(Some(maximum)),
            Bound::Excluded(&maximum) => maximum.checked_sub(1).map(Some),
            Bound::Unbounded => Some(None),
        };
        match (minimum, maximum) {
            (Some(minimum), Some(maximum)) => self.count = Some(Count { minimum, maximum }),
            _ => self.fail(Error::InvalidCount(self.label())),
        }
        self
    }

    /// Binds a field of the result record.
    pub fn field<V: Accept<S> + 'a>(mut self, field: impl Fn(&mut T) -> &mut V + 'a) -> Self {
        let place: Place<'a, T, V> = Place::Field(Box::new(field));
        self.destination = Some(V::bind(place));
        self
    }

    /// Binds a free-standing location that outlives the parser.
    pub fn variable<V: Accept<S> + 'a>(mut self, variable: &'a mut V) -> Self {
        let place: Place<'a, T, V> = Place::Variable(variable);
        self.destination = Some(V::bind(place));
        self
    }

    pub fn composite<C: Composite + 'a>(mut self, field: impl Fn(&mut T) -> &mut C + 'a) -> Self {
        let place: Place<'a, T, C> = Place::Field(Box::new(field));
        self.destination = Some(Destination::Composite(Box::new(Aggregate(place))));
        self
    }

    pub fn composite_variable<C: Composite + 'a>(mut self, variable: &'a mut C) -> Self {
        let place: Place<'a, T, C> = Place::Variable(variable);
        self.destination = Some(Destination::Composite(Box::new(Aggregate(place))));
        self
    }

    fn fail(&mut self, error: Error) {
        self.error.get_or_insert(error);
    }

    fn label(&self) -> Cow<'static, str> {
        self.name.clone().unwrap_or(Cow::Borrowed(""))
    }

    fn finish(self, ordinal: usize) -> Result<Argument<'a, T>, Error> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let name = match self.name {
            Some(name) => name,
            None if S::POSITIONAL => Cow::Owned(format!("arg{ordinal}")),
            None => Cow::Borrowed(""),
        };
        let Some(destination) = self.destination else {
            return Err(Error::MissingDestination(name));
        };
        let mut argument = Argument {
            name,
            help: self.help,
            flags: self.flags,
            position: S::POSITIONAL.then_some(ordinal),
            destination,
            set: false,
        };
        if let Some(count) = self.count {
            argument.count(count)?;
        }
        Ok(argument)
    }
}
