use core::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

/// Bit set of behavior switches. Argument level flags are given at registration,
/// parse level flags are given to [`Parser::parse`](crate::Parser::parse).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

/// The scalar type a destination converts tokens into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Float,
    Double,
    Bool,
    String,
    Str,
}

impl Flags {
    pub const NONE: Self = Self(0);
    /// Do not render `(Default: ...)` for the argument, or for all arguments at parse level.
    pub const NO_DEFAULT: Self = Self(1 << 0);
    /// The argument must appear, or at parse level every non-flag argument must appear.
    pub const REQUIRED: Self = Self(1 << 1);
    /// Leave the argument out of the usage text.
    pub const HIDE: Self = Self(1 << 2);
    pub const NO_AUTO_HELP: Self = Self(1 << 3);
    pub const SKIP_UNRECOGNIZED: Self = Self(1 << 4);
    pub const NO_EXIT_ON_ERROR: Self = Self(1 << 5);

    const NAMES: [(Self, &'static str); 6] = [
        (Self::NO_DEFAULT, "NO_DEFAULT"),
        (Self::REQUIRED, "REQUIRED"),
        (Self::HIDE, "HIDE"),
        (Self::NO_AUTO_HELP, "NO_AUTO_HELP"),
        (Self::SKIP_UNRECOGNIZED, "SKIP_UNRECOGNIZED"),
        (Self::NO_EXIT_ON_ERROR, "NO_EXIT_ON_ERROR"),
    ];

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self::Output {
        self.union(other)
    }
}

impl BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, other: Self) {
        *self = self.union(other);
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }

        let mut join = false;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if join {
                    write!(f, " | ")?;
                }
                join = true;
                write!(f, "{name}")?;
            }
        }
        Ok(())
    }
}

impl Kind {
    /// Name used in type annotations and error messages. String views read as `string`.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Bool => "bool",
            Kind::String | Kind::Str => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
