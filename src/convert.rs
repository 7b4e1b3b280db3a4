use crate::{error::Bound, meta::Kind};
use core::{fmt::Write, num::IntErrorKind};
use std::borrow::Cow;

/// Why a token could not become a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Invalid,
    Range(Bound),
}

/// A value that a single token converts into.
pub trait Scalar: Sized + Default + 'static {
    const KIND: Kind;

    fn convert(token: &Cow<'static, str>) -> Result<Self, Conversion>;
    /// Writes the canonical form used for `(Default: ...)` annotations.
    fn render(&self, buffer: &mut String);
}

impl Scalar for i32 {
    const KIND: Kind = Kind::Int;

    fn convert(token: &Cow<'static, str>) -> Result<Self, Conversion> {
        token.parse().map_err(|error: core::num::ParseIntError| match error.kind() {
            IntErrorKind::PosOverflow => {
                Conversion::Range(Bound::Maximum(Cow::Owned(i32::MAX.to_string())))
            }
            IntErrorKind::NegOverflow => {
                Conversion::Range(Bound::Minimum(Cow::Owned(i32::MIN.to_string())))
            }
            _ => Conversion::Invalid,
        })
    }

    fn render(&self, buffer: &mut String) {
        let _ = write!(buffer, "{self}");
    }
}

macro_rules! floating {
    ($type: ty, $kind: ident) => {
        impl Scalar for $type {
            const KIND: Kind = Kind::$kind;

            fn convert(token: &Cow<'static, str>) -> Result<Self, Conversion> {
                let value: $type = token.parse().map_err(|_| Conversion::Invalid)?;
                if value.is_infinite() && !infinity(token) {
                    let limit = Cow::Owned(<$type>::MAX.to_string());
                    Err(Conversion::Range(if value < 0.0 {
                        Bound::Minimum(limit)
                    } else {
                        Bound::Maximum(limit)
                    }))
                } else {
                    Ok(value)
                }
            }

            fn render(&self, buffer: &mut String) {
                let _ = write!(buffer, "{self}");
            }
        }
    };
}

floating!(f32, Float);
floating!(f64, Double);

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn convert(token: &Cow<'static, str>) -> Result<Self, Conversion> {
        match &**token {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Conversion::Invalid),
        }
    }

    fn render(&self, buffer: &mut String) {
        buffer.push_str(if *self { "true" } else { "false" });
    }
}

impl Scalar for String {
    const KIND: Kind = Kind::String;

    fn convert(token: &Cow<'static, str>) -> Result<Self, Conversion> {
        Ok(token.to_string())
    }

    fn render(&self, buffer: &mut String) {
        buffer.push_str(self);
    }
}

impl Scalar for Cow<'static, str> {
    const KIND: Kind = Kind::Str;

    fn convert(token: &Cow<'static, str>) -> Result<Self, Conversion> {
        Ok(token.clone())
    }

    fn render(&self, buffer: &mut String) {
        buffer.push_str(self);
    }
}

/// Only spelled-out infinities may produce an infinite float.
fn infinity(token: &str) -> bool {
    let token = token.strip_prefix(['+', '-']).unwrap_or(token);
    token.eq_ignore_ascii_case("inf") || token.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert<S: Scalar>(token: &'static str) -> Result<S, Conversion> {
        S::convert(&Cow::Borrowed(token))
    }

    #[test]
    fn int_rejects_trailing_garbage() {
        assert_eq!(convert::<i32>("12"), Ok(12));
        assert_eq!(convert::<i32>("-7"), Ok(-7));
        assert_eq!(convert::<i32>("12abc"), Err(Conversion::Invalid));
        assert_eq!(convert::<i32>(""), Err(Conversion::Invalid));
        assert_eq!(convert::<i32>("1.5"), Err(Conversion::Invalid));
    }

    #[test]
    fn int_reports_violated_bound() {
        assert_eq!(
            convert::<i32>("2147483648"),
            Err(Conversion::Range(Bound::Maximum("2147483647".into())))
        );
        assert_eq!(
            convert::<i32>("-2147483649"),
            Err(Conversion::Range(Bound::Minimum("-2147483648".into())))
        );
        assert_eq!(convert::<i32>("2147483647"), Ok(i32::MAX));
    }

    #[test]
    fn float_overflow_is_out_of_range() {
        assert!(matches!(
            convert::<f32>("1e39"),
            Err(Conversion::Range(Bound::Maximum(_)))
        ));
        assert!(matches!(
            convert::<f32>("-1e39"),
            Err(Conversion::Range(Bound::Minimum(_)))
        ));
        assert!(matches!(convert::<f64>("1e39"), Ok(value) if value == 1e39));
        assert!(matches!(
            convert::<f64>("1e400"),
            Err(Conversion::Range(Bound::Maximum(_)))
        ));
    }

    #[test]
    fn float_accepts_spelled_infinity() {
        assert_eq!(convert::<f32>("inf"), Ok(f32::INFINITY));
        assert_eq!(convert::<f64>("-Infinity"), Ok(f64::NEG_INFINITY));
        assert_eq!(convert::<f32>("2.5"), Ok(2.5));
        assert_eq!(convert::<f32>("2.5x"), Err(Conversion::Invalid));
    }

    #[test]
    fn strings_always_convert() {
        assert_eq!(convert::<String>("-anything"), Ok("-anything".to_string()));
        assert_eq!(
            convert::<Cow<'static, str>>("view"),
            Ok(Cow::Borrowed("view"))
        );
    }

    #[test]
    fn render_is_canonical() {
        let mut buffer = String::new();
        1.5f64.render(&mut buffer);
        buffer.push(' ');
        true.render(&mut buffer);
        buffer.push(' ');
        (-3i32).render(&mut buffer);
        assert_eq!(buffer, "1.5 true -3");
    }
}
