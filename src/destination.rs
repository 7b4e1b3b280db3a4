use crate::{
    composite::{Compose, Part},
    convert::Scalar,
    meta::Kind,
    scope::{Named, Positional},
};
use std::borrow::Cow;

/// Where a parsed value is written: a free-standing location, or a field of the
/// result record reached through an accessor.
pub enum Place<'a, T, V: ?Sized> {
    Variable(&'a mut V),
    Field(Box<dyn Fn(&mut T) -> &mut V + 'a>),
}

pub enum Slot<'a, T> {
    Int(Place<'a, T, i32>),
    Float(Place<'a, T, f32>),
    Double(Place<'a, T, f64>),
    Bool(Place<'a, T, bool>),
    String(Place<'a, T, String>),
    Str(Place<'a, T, Cow<'static, str>>),
}

pub enum Slice<'a, T> {
    Int(Place<'a, T, [i32]>),
    Float(Place<'a, T, [f32]>),
    Double(Place<'a, T, [f64]>),
    String(Place<'a, T, [String]>),
    Str(Place<'a, T, [Cow<'static, str>]>),
}

pub enum Sequence<'a, T> {
    Int(Place<'a, T, Vec<i32>>),
    Float(Place<'a, T, Vec<f32>>),
    Double(Place<'a, T, Vec<f64>>),
    String(Place<'a, T, Vec<String>>),
    Str(Place<'a, T, Vec<Cow<'static, str>>>),
}

/// Inclusive bounds on the number of values a list accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Count {
    pub minimum: usize,
    pub maximum: Option<usize>,
}

pub enum Destination<'a, T> {
    Scalar(Slot<'a, T>),
    Array(Slice<'a, T>, usize),
    List(Sequence<'a, T>, Count),
    Composite(Box<dyn Compose<T> + 'a>),
}

/// Expands `$body` once per listed variant with `$place` bound to the variant's place.
macro_rules! dispatch {
    ($value: expr, $type: ident [$($variant: ident),*], $place: pat => $body: expr $(, $other: pat => $rest: expr)*) => {
        match $value {
            $($type::$variant($place) => $body,)*
            $($other => $rest,)*
        }
    };
}
pub(crate) use dispatch;

/// A type that can receive parsed values: scalars, fixed arrays and lists.
pub trait Bind: Sized {
    fn bind<'a, T: 'a>(place: Place<'a, T, Self>) -> Destination<'a, T>
    where
        Self: 'a;
}

/// A scalar that reads a textual value and may therefore appear in arrays, lists and composites.
pub trait Element: Scalar {
    fn slice<'a, T: 'a>(place: Place<'a, T, [Self]>) -> Slice<'a, T>;
    fn sequence<'a, T: 'a>(place: Place<'a, T, Vec<Self>>) -> Sequence<'a, T>;
}

/// A destination that consumes at least one token. Every bindable type but `bool`.
pub trait Textual: Bind {}

/// Destinations accepted in the registration scope `S`.
pub trait Accept<S>: Bind {}

impl<V: Bind> Accept<Named> for V {}
impl<V: Textual> Accept<Positional> for V {}

impl<'a, T, V: ?Sized> Place<'a, T, V> {
    #[inline]
    pub fn resolve<'b>(&'b mut self, record: &'b mut T) -> &'b mut V {
        match self {
            Place::Variable(value) => &mut **value,
            Place::Field(field) => field(record),
        }
    }

    #[inline]
    pub fn peek<'b>(&'b self, record: &'b mut T) -> &'b V {
        match self {
            Place::Variable(value) => &**value,
            Place::Field(field) => field(record),
        }
    }
}

impl<'a, T: 'a, V: 'static> Place<'a, T, V> {
    pub fn map<U: ?Sized + 'a>(self, cast: fn(&mut V) -> &mut U) -> Place<'a, T, U> {
        match self {
            Place::Variable(value) => Place::Variable(cast(value)),
            Place::Field(field) => {
                Place::Field(Box::new(accessor(move |record: &mut T| cast(field(record)))))
            }
        }
    }
}

#[inline]
fn accessor<T, U: ?Sized, F: Fn(&mut T) -> &mut U>(field: F) -> F {
    field
}

#[inline]
fn as_slice<S, const N: usize>(array: &mut [S; N]) -> &mut [S] {
    array
}

impl<T> Slot<'_, T> {
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Int(_) => Kind::Int,
            Slot::Float(_) => Kind::Float,
            Slot::Double(_) => Kind::Double,
            Slot::Bool(_) => Kind::Bool,
            Slot::String(_) => Kind::String,
            Slot::Str(_) => Kind::Str,
        }
    }
}

impl<T> Slice<'_, T> {
    pub fn kind(&self) -> Kind {
        match self {
            Slice::Int(_) => Kind::Int,
            Slice::Float(_) => Kind::Float,
            Slice::Double(_) => Kind::Double,
            Slice::String(_) => Kind::String,
            Slice::Str(_) => Kind::Str,
        }
    }
}

impl<T> Sequence<'_, T> {
    pub fn kind(&self) -> Kind {
        match self {
            Sequence::Int(_) => Kind::Int,
            Sequence::Float(_) => Kind::Float,
            Sequence::Double(_) => Kind::Double,
            Sequence::String(_) => Kind::String,
            Sequence::Str(_) => Kind::Str,
        }
    }
}

impl Bind for bool {
    fn bind<'a, T: 'a>(place: Place<'a, T, Self>) -> Destination<'a, T>
    where
        Self: 'a,
    {
        Destination::Scalar(Slot::Bool(place))
    }
}

macro_rules! element {
    ($type: ty, $variant: ident) => {
        impl Bind for $type {
            fn bind<'a, T: 'a>(place: Place<'a, T, Self>) -> Destination<'a, T>
            where
                Self: 'a,
            {
                Destination::Scalar(Slot::$variant(place))
            }
        }

        impl Element for $type {
            fn slice<'a, T: 'a>(place: Place<'a, T, [Self]>) -> Slice<'a, T> {
                Slice::$variant(place)
            }

            fn sequence<'a, T: 'a>(place: Place<'a, T, Vec<Self>>) -> Sequence<'a, T> {
                Sequence::$variant(place)
            }
        }

        impl Textual for $type {}
        impl Part for $type {
            fn consume(context: &mut crate::parse::Context) -> Result<Self, crate::Error> {
                context.value()
            }

            fn annotate(buffer: &mut String) {
                buffer.push_str(<$type as Scalar>::KIND.name());
            }

            fn render(&self, buffer: &mut String) {
                Scalar::render(self, buffer);
            }
        }
    };
}

element!(i32, Int);
element!(f32, Float);
element!(f64, Double);
element!(String, String);
element!(Cow<'static, str>, Str);

macro_rules! array {
    ($($count: literal),*) => {
        $(
            impl<S: Element> Bind for [S; $count] {
                fn bind<'a, T: 'a>(place: Place<'a, T, Self>) -> Destination<'a, T>
                where
                    Self: 'a,
                {
                    Destination::Array(S::slice(place.map(as_slice::<S, $count>)), $count)
                }
            }

            impl<S: Element> Textual for [S; $count] {}
            impl<S: Element> Part for [S; $count] {
                fn consume(context: &mut crate::parse::Context) -> Result<Self, crate::Error> {
                    let mut values: [S; $count] = Default::default();
                    context.fill(&mut values)?;
                    Ok(values)
                }

                fn annotate(buffer: &mut String) {
                    buffer.push_str(S::KIND.name());
                    buffer.push_str(concat!("[", $count, "]"));
                }

                fn render(&self, buffer: &mut String) {
                    join(self, buffer);
                }
            }
        )*
    };
}

array!(1, 2, 3, 4, 5, 6, 7, 8, 9, 10);

impl<S: Element> Bind for Vec<S> {
    fn bind<'a, T: 'a>(place: Place<'a, T, Self>) -> Destination<'a, T>
    where
        Self: 'a,
    {
        Destination::List(S::sequence(place), Count::default())
    }
}

impl<S: Element> Textual for Vec<S> {}
impl<S: Element> Part for Vec<S> {
    fn consume(context: &mut crate::parse::Context) -> Result<Self, crate::Error> {
        let mut values = Vec::new();
        context.gather(&mut values);
        Ok(values)
    }

    fn annotate(buffer: &mut String) {
        buffer.push_str(S::KIND.name());
        buffer.push_str("[0:]");
    }

    fn render(&self, buffer: &mut String) {
        join(self, buffer);
    }
}

/// Renders values separated by single spaces.
pub fn join<S: Scalar>(values: &[S], buffer: &mut String) {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            buffer.push(' ');
        }
        value.render(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Record {
        scale: [f32; 3],
    }

    fn scale(record: &mut Record) -> &mut [f32; 3] {
        &mut record.scale
    }

    #[test]
    fn array_field_resolves_to_slice() {
        let Destination::Array(Slice::Float(mut place), 3) = <[f32; 3]>::bind(Place::Field(Box::new(scale))) else {
            panic!("expected a float array of length 3");
        };
        let mut record = Record::default();
        place.resolve(&mut record)[1] = 2.5;
        assert_eq!(record.scale, [0.0, 2.5, 0.0]);
        assert_eq!(place.peek(&mut record), [0.0, 2.5, 0.0]);
    }

    #[test]
    fn array_variable_resolves_to_slice() {
        let mut values = [1, 2];
        {
            let Destination::Array(Slice::Int(mut place), 2) = <[i32; 2]>::bind::<()>(Place::Variable(&mut values)) else {
                panic!("expected an int array of length 2");
            };
            place.resolve(&mut ()).copy_from_slice(&[7, 8]);
        }
        assert_eq!(values, [7, 8]);
    }
}
