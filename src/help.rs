use crate::{
    convert::Scalar,
    destination::{dispatch, join, Destination, Sequence, Slice, Slot},
    meta::Flags,
    parse::Parser,
    registry::Argument,
    style::Item,
    text::Text,
    INDENT,
};
use std::fmt;

const OPEN: &str = "<";
const CLOSE: &str = ">";

/// Renders the usage line, the program description and one paragraph per visible
/// argument, positionals first. Defaults of fields are read from a fresh `T::default()`,
/// defaults of variables from their current value.
pub(crate) fn usage<T: Default>(
    parser: &Parser<'_, T>,
    program: Option<&str>,
    flags: Flags,
) -> Result<String, fmt::Error> {
    let mut text = Text::new(&*parser.style);
    let name = match (&*parser.name, program) {
        ("", Some(program)) => program,
        (name, _) => name,
    };
    if name.is_empty() {
        text.atomic(0, Item::Usage, "usage:")?;
    } else {
        text.atomic(0, Item::Usage, &format!("usage: {name}"))?;
    }

    let indent = text.line();
    let mut unit = String::new();
    let arguments = || parser.registry.arguments().filter(|argument| !argument.is_hidden());
    for argument in arguments() {
        let required = argument.is_required(flags);
        unit.clear();
        unit.push(' ');
        if !required {
            unit.push('[');
        }
        write_signature(argument, &parser.prefix, &mut unit);
        if !required {
            unit.push(']');
        }
        text.atomic(indent, Item::Argument, &unit)?;
    }
    text.newline(2);

    if !parser.description.is_empty() {
        text.natural(0, Item::Description, &parser.description)?;
        text.newline(2);
    }

    let mut scratch = T::default();
    let mut value = String::new();
    for argument in arguments() {
        unit.clear();
        unit.extend([' '; INDENT]);
        write_signature(argument, &parser.prefix, &mut unit);
        unit.push(':');
        text.atomic(0, Item::Argument, &unit)?;
        let indent = text.line() + 1;

        if !argument.help.is_empty() {
            text.space(1);
            text.natural(indent, Item::Help, &argument.help)?;
        }
        if argument.shows_default(flags) {
            value.clear();
            write_default(&argument.destination, &mut scratch, &mut value);
            if !value.trim().is_empty() {
                text.atomic(indent, Item::Default, &format!(" (Default: {value})"))?;
            }
        }
        text.newline(2);
    }
    Ok(text.finish())
}

/// The argument's spelled name followed by its type annotation, e.g. `-scale <float[3]>`.
pub(crate) fn signature<T>(argument: &Argument<'_, T>, prefix: &str) -> String {
    let mut buffer = String::new();
    write_signature(argument, prefix, &mut buffer);
    buffer
}

fn write_signature<T>(argument: &Argument<'_, T>, prefix: &str, buffer: &mut String) {
    buffer.push_str(&argument.key(prefix));
    if !argument.is_flag() {
        buffer.push(' ');
        buffer.push_str(OPEN);
        write_annotation(&argument.destination, buffer);
        buffer.push_str(CLOSE);
    }
}

fn write_annotation<T>(destination: &Destination<'_, T>, buffer: &mut String) {
    match destination {
        Destination::Scalar(slot) => buffer.push_str(slot.kind().name()),
        Destination::Array(slice, length) => {
            buffer.push_str(slice.kind().name());
            buffer.push('[');
            buffer.push_str(&length.to_string());
            buffer.push(']');
        }
        Destination::List(sequence, count) => {
            buffer.push_str(sequence.kind().name());
            buffer.push('[');
            buffer.push_str(&count.minimum.to_string());
            buffer.push(':');
            if let Some(maximum) = count.maximum {
                buffer.push_str(&maximum.to_string());
            }
            buffer.push(']');
        }
        Destination::Composite(composite) => composite.annotate(buffer),
    }
}

fn write_default<T>(destination: &Destination<'_, T>, scratch: &mut T, buffer: &mut String) {
    match destination {
        Destination::Scalar(slot) => dispatch!(
            slot,
            Slot[Int, Float, Double, Bool, String, Str],
            place => Scalar::render(place.peek(scratch), buffer)
        ),
        Destination::Array(slice, _) => dispatch!(
            slice,
            Slice[Int, Float, Double, String, Str],
            place => join(place.peek(scratch), buffer)
        ),
        Destination::List(sequence, _) => dispatch!(
            sequence,
            Sequence[Int, Float, Double, String, Str],
            place => join(place.peek(scratch), buffer)
        ),
        Destination::Composite(composite) => composite.render(scratch, buffer),
    }
}
