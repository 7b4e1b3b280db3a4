use crate::{destination::Place, error::Error, parse::Context, utility::short_type_name};
use std::{borrow::Cow, mem::replace};

/// A user aggregate assembled from an ordered tuple of parts.
///
/// ```
/// use clue::Composite;
///
/// #[derive(Default)]
/// struct Vec3 {
///     x: f32,
///     y: f32,
///     z: f32,
/// }
///
/// impl Composite for Vec3 {
///     type Parts = (f32, f32, f32);
///
///     fn compose((x, y, z): Self::Parts) -> Self {
///         Self { x, y, z }
///     }
///
///     fn decompose(&self) -> Self::Parts {
///         (self.x, self.y, self.z)
///     }
/// }
/// ```
pub trait Composite: Sized {
    type Parts: Parts;

    fn compose(parts: Self::Parts) -> Self;
    /// Splits a value back into its parts, used to render its default.
    fn decompose(&self) -> Self::Parts;

    /// Name shown first in the type annotation (`<Vec3-float-float-float>`).
    fn name() -> Cow<'static, str> {
        Cow::Borrowed(short_type_name::<Self>())
    }
}

/// One component of a composite: a scalar, a fixed array or a list.
pub trait Part: Sized {
    fn consume(context: &mut Context) -> Result<Self, Error>;
    fn annotate(buffer: &mut String);
    fn render(&self, buffer: &mut String);
}

/// A tuple of [`Part`]s, consumed in order.
pub trait Parts: Sized {
    fn consume(context: &mut Context) -> Result<Self, Error>;
    fn annotate(buffer: &mut String);
    fn render(&self, buffer: &mut String);
}

/// Type-erased composite destination.
pub trait Compose<T> {
    fn consume(&mut self, record: &mut T, context: &mut Context) -> Result<(), Error>;
    fn annotate(&self, buffer: &mut String);
    fn render(&self, record: &mut T, buffer: &mut String);
}

pub struct Aggregate<'a, T, C>(pub Place<'a, T, C>);

impl<T, C: Composite> Compose<T> for Aggregate<'_, T, C> {
    fn consume(&mut self, record: &mut T, context: &mut Context) -> Result<(), Error> {
        // Every part is read before anything is written.
        let parts = C::Parts::consume(context)?;
        *self.0.resolve(record) = C::compose(parts);
        Ok(())
    }

    fn annotate(&self, buffer: &mut String) {
        buffer.push_str(&C::name());
        buffer.push('-');
        C::Parts::annotate(buffer);
    }

    fn render(&self, record: &mut T, buffer: &mut String) {
        self.0.peek(record).decompose().render(buffer);
    }
}

macro_rules! parts {
    ($($name: ident, $index: tt),+) => {
        impl<$($name: Part),+> Parts for ($($name,)+) {
            fn consume(context: &mut Context) -> Result<Self, Error> {
                Ok(($($name::consume(context)?,)+))
            }

            fn annotate(buffer: &mut String) {
                let mut join = false;
                $(
                    if replace(&mut join, true) {
                        buffer.push('-');
                    }
                    $name::annotate(buffer);
                )+
            }

            fn render(&self, buffer: &mut String) {
                let mut join = false;
                $(
                    if replace(&mut join, true) {
                        buffer.push(' ');
                    }
                    self.$index.render(buffer);
                )+
            }
        }
    };
}

parts!(P0, 0);
parts!(P0, 0, P1, 1);
parts!(P0, 0, P1, 1, P2, 2);
parts!(P0, 0, P1, 1, P2, 2, P3, 3);
parts!(P0, 0, P1, 1, P2, 2, P3, 3, P4, 4);
parts!(P0, 0, P1, 1, P2, 2, P3, 3, P4, 4, P5, 5);
parts!(P0, 0, P1, 1, P2, 2, P3, 3, P4, 4, P5, 5, P6, 6);
parts!(P0, 0, P1, 1, P2, 2, P3, 3, P4, 4, P5, 5, P6, 6, P7, 7);
