/// Registration scope of an argument matched by its prefixed name (`-count 3`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Named;

/// Registration scope of an argument matched by its ordinal position. Such an argument
/// always consumes tokens, so flag-like `bool` destinations are rejected at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

pub trait Scope {
    const POSITIONAL: bool;
}

impl Scope for Named {
    const POSITIONAL: bool = false;
}

impl Scope for Positional {
    const POSITIONAL: bool = true;
}
