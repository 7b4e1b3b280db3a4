mod build;
mod composite;
mod convert;
mod destination;
mod error;
mod help;
mod meta;
mod parse;
mod registry;
pub mod scope;
mod spell;
pub mod style;
mod text;
mod utility;

pub use crate::{
    build::{Builder, Declaration},
    composite::{Composite, Part, Parts},
    convert::Scalar,
    destination::{Accept, Bind, Element, Textual},
    error::{Bound, Error, Failure},
    meta::{Flags, Kind},
    parse::{Context, Parser},
    text::Text,
};

/// Column budget of the usage text.
pub const WIDTH: usize = 80;
/// Indentation of each argument paragraph in the usage text.
pub const INDENT: usize = 4;
/// Default text introducing an optional argument's name.
pub const PREFIX: &str = "-";
/// Tokens that request the usage text unless [`Flags::NO_AUTO_HELP`] is given.
pub const HELP: [&str; 4] = ["-h", "-help", "--help", "/?"];
