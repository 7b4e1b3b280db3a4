use crate::{
    convert::{Conversion, Scalar},
    destination::{dispatch, Count, Destination, Sequence, Slice, Slot},
    error::{Error, Failure},
    help,
    meta::Flags,
    registry::{Argument, Index, Registry},
    spell::Spell,
    style::Style,
    HELP,
};
use std::{
    borrow::Cow,
    collections::HashMap,
    env,
    io::{self, Write},
    process,
};
use tracing::{debug, trace};

/// A configured parser. Each call to a `parse` method starts from `T::default()` and
/// clears the record of which arguments were seen.
pub struct Parser<'a, T> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) description: Cow<'static, str>,
    pub(crate) prefix: Cow<'static, str>,
    pub(crate) style: Box<dyn Style>,
    pub(crate) registry: Registry<'a, T>,
}

/// The remaining tokens and the argument currently consuming them.
pub struct Context<'c> {
    tokens: &'c mut Tokens,
    lookup: &'c Lookup<'c>,
    key: &'c Cow<'static, str>,
}

struct Tokens {
    items: Vec<Cow<'static, str>>,
    index: usize,
}

struct Lookup<'l> {
    prefix: &'l str,
    indices: &'l HashMap<Cow<'static, str>, Index>,
    help: bool,
}

impl<'a, T> Parser<'a, T> {
    /// Whether the last parse assigned the argument registered under `name`.
    pub fn is_set(&self, name: &str) -> bool {
        self.registry
            .find(name)
            .map_or(false, |argument| argument.set)
    }

    fn missing(&self, flags: Flags) -> Result<(), Error> {
        let missing: Vec<_> = self
            .registry
            .arguments()
            .filter(|argument| argument.is_required(flags) && !argument.set)
            .map(|argument| help::signature(argument, &self.prefix))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequired(missing))
        }
    }
}

impl<'a, T: Default> Parser<'a, T> {
    /// Parses the process arguments. The first one names the program.
    ///
    /// On a help token or an error, the usage (and the error) is printed and the process exits
    /// unless `flags` contains [`Flags::NO_EXIT_ON_ERROR`]. With that flag nothing is printed:
    /// a help request returns [`Error::Help`] holding the rendered usage, and any other error is
    /// returned as is, for the caller to report.
    pub fn parse(&mut self, flags: Flags) -> Result<T, Failure<T>> {
        self.parse_from(env::args(), flags)
    }

    /// Parses `arguments`, skipping the first one which names the program. Errors are reported
    /// as in [`Parser::parse`].
    pub fn parse_from<I: IntoIterator>(&mut self, arguments: I, flags: Flags) -> Result<T, Failure<T>>
    where
        I::Item: Into<Cow<'static, str>>,
    {
        let mut arguments = arguments.into_iter().map(Into::into);
        let program = arguments.next();
        self.run(program, arguments.collect(), flags)
    }

    /// Parses `arguments` as they follow the program name. Errors are reported as in
    /// [`Parser::parse`].
    pub fn parse_with<I: IntoIterator>(&mut self, arguments: I, flags: Flags) -> Result<T, Failure<T>>
    where
        I::Item: Into<Cow<'static, str>>,
    {
        self.run(None, arguments.into_iter().map(Into::into).collect(), flags)
    }

    pub fn usage(&self, flags: Flags) -> Result<String, Error> {
        Ok(help::usage(self, None, flags)?)
    }

    /// Writes the usage to stdout.
    pub fn print_usage(&self, flags: Flags) -> Result<(), Error> {
        print!("{}", self.usage(flags)?);
        Ok(())
    }

    fn run(
        &mut self,
        program: Option<Cow<'static, str>>,
        tokens: Vec<Cow<'static, str>>,
        flags: Flags,
    ) -> Result<T, Failure<T>> {
        debug!(count = tokens.len(), ?flags, "parsing arguments");
        self.registry.reset();
        let mut value = T::default();
        let result = scan(&mut self.registry, &mut value, tokens, &self.prefix, flags)
            .and_then(|()| self.missing(flags));
        let program = program.as_deref();
        let error = match result {
            Ok(()) => return Ok(value),
            Err(Error::Help(None)) => {
                debug!("help requested");
                match help::usage(self, program, flags) {
                    Ok(usage) => Error::Help(Some(usage)),
                    Err(error) => Error::Format(error),
                }
            }
            Err(error) => {
                debug!(%error, "failed to parse arguments");
                error
            }
        };

        if !flags.contains(Flags::NO_EXIT_ON_ERROR) {
            self.exit(&error, program, flags);
        }
        Err(Failure { value, error })
    }

    fn exit(&self, error: &Error, program: Option<&str>, flags: Flags) -> ! {
        // Nothing is left to report a failed write to.
        match error {
            Error::Help(Some(usage)) => {
                let _ = write!(io::stdout().lock(), "{usage}");
            }
            error => {
                let mut stderr = io::stderr().lock();
                if let Ok(usage) = help::usage(self, program, flags) {
                    let _ = write!(stderr, "{usage}");
                }
                let _ = writeln!(stderr, "{error}");
            }
        }
        process::exit(1)
    }
}

fn scan<T>(
    registry: &mut Registry<'_, T>,
    record: &mut T,
    tokens: Vec<Cow<'static, str>>,
    prefix: &str,
    flags: Flags,
) -> Result<(), Error> {
    let Registry {
        optionals,
        positionals,
        indices,
    } = registry;
    let lookup = Lookup {
        prefix,
        indices,
        help: !flags.contains(Flags::NO_AUTO_HELP),
    };
    let mut tokens = Tokens {
        items: tokens,
        index: 0,
    };
    let mut positionals = positionals.iter_mut();

    while let Some(token) = tokens.peek() {
        if lookup.help(token) {
            return Err(Error::Help(None));
        }

        let argument = match lookup.named(token) {
            Some(index) => {
                trace!(%token, "matched optional argument");
                tokens.advance();
                &mut optionals[index]
            }
            // The token stays in place and becomes the positional's first value.
            None => match positionals.next() {
                Some(argument) => {
                    trace!(%token, name = %argument.name, "matched positional argument");
                    argument
                }
                None if flags.contains(Flags::SKIP_UNRECOGNIZED) => {
                    debug!(%token, "skipping unrecognized argument");
                    tokens.advance();
                    continue;
                }
                None => return Err(unrecognized(token, &lookup)),
            },
        };
        consume(argument, record, &mut tokens, &lookup)?;
    }
    Ok(())
}

fn consume<T>(
    argument: &mut Argument<'_, T>,
    record: &mut T,
    tokens: &mut Tokens,
    lookup: &Lookup,
) -> Result<(), Error> {
    let key = argument.key(lookup.prefix);
    let mut context = Context {
        tokens,
        lookup,
        key: &key,
    };
    match &mut argument.destination {
        Destination::Scalar(slot) => dispatch!(
            slot,
            Slot[Int, Float, Double, String, Str],
            place => *place.resolve(record) = context.value()?,
            Slot::Bool(place) => {
                let flag = place.resolve(record);
                *flag = !*flag;
            }
        ),
        Destination::Array(slice, _) => dispatch!(
            slice,
            Slice[Int, Float, Double, String, Str],
            place => context.fill(place.resolve(record))?
        ),
        Destination::List(sequence, count) => {
            let found = dispatch!(
                sequence,
                Sequence[Int, Float, Double, String, Str],
                place => context.gather(place.resolve(record))
            );
            check(count, found, &key)?;
        }
        Destination::Composite(composite) => composite.consume(record, &mut context)?,
    }
    argument.set = true;
    Ok(())
}

fn check(count: &Count, found: usize, key: &Cow<'static, str>) -> Result<(), Error> {
    if found < count.minimum {
        return Err(Error::TooFewValues(key.clone(), count.minimum, found));
    }
    match count.maximum {
        Some(maximum) if found > maximum => Err(Error::TooManyValues(key.clone(), maximum, found)),
        _ => Ok(()),
    }
}

fn unrecognized(token: &Cow<'static, str>, lookup: &Lookup) -> Error {
    let mut candidates: Vec<_> = lookup
        .indices
        .iter()
        .filter(|(_, index)| matches!(index, Index::Named(_)))
        .map(|(name, _)| format!("{}{name}", lookup.prefix))
        .collect();
    candidates.sort();
    let suggestions = Spell::new()
        .suggest(token, candidates, Spell::tolerance(token))
        .into_iter()
        .map(|(suggestion, distance)| (Cow::Owned(suggestion), distance))
        .collect();
    Error::UnrecognizedArgument(token.clone(), suggestions)
}

impl Tokens {
    #[inline]
    fn peek(&self) -> Option<&Cow<'static, str>> {
        self.items.get(self.index)
    }

    #[inline]
    fn advance(&mut self) {
        self.index += 1;
    }
}

impl Lookup<'_> {
    fn help(&self, token: &str) -> bool {
        self.help && HELP.contains(&token)
    }

    fn named(&self, token: &str) -> Option<usize> {
        match self.indices.get(token.strip_prefix(self.prefix)?)? {
            Index::Named(index) => Some(*index),
            Index::Position(_) => None,
        }
    }

    /// A list stops before anything that would start another argument.
    fn stops(&self, token: &str) -> bool {
        self.help(token) || self.named(token).is_some()
    }
}

impl Context<'_> {
    /// Converts the next token. On failure the token is left in place.
    pub(crate) fn value<V: Scalar>(&mut self) -> Result<V, Error> {
        let Some(token) = self.tokens.peek() else {
            return Err(Error::MissingValue(self.key.clone(), V::KIND.name()));
        };
        match V::convert(token) {
            Ok(value) => {
                self.tokens.advance();
                Ok(value)
            }
            Err(Conversion::Invalid) => Err(Error::FailedToParseValue(
                token.clone(),
                self.key.clone(),
                V::KIND.name(),
            )),
            Err(Conversion::Range(bound)) => Err(Error::OutOfRange(
                token.clone(),
                self.key.clone(),
                V::KIND.name(),
                bound,
            )),
        }
    }

    /// Converts exactly `values.len()` tokens. Nothing is written unless all of them convert.
    pub(crate) fn fill<V: Scalar>(&mut self, values: &mut [V]) -> Result<(), Error> {
        let mut staged = Vec::with_capacity(values.len());
        for _ in 0..values.len() {
            staged.push(self.value::<V>()?);
        }
        for (value, staged) in values.iter_mut().zip(staged) {
            *value = staged;
        }
        Ok(())
    }

    /// Replaces `values` with as many tokens as convert, stopping before the next
    /// argument name, at the first token that fails to convert or at the end of input.
    pub(crate) fn gather<V: Scalar>(&mut self, values: &mut Vec<V>) -> usize {
        values.clear();
        while let Some(token) = self.tokens.peek() {
            if self.lookup.stops(token) {
                break;
            }
            match V::convert(token) {
                Ok(value) => {
                    values.push(value);
                    self.tokens.advance();
                }
                Err(_) => break,
            }
        }
        values.len()
    }
}
