use clue::{Builder, Flags};
use std::error;

fn main() -> Result<(), Box<dyn error::Error>> {
    let (mut left, mut right) = (0, 0);
    Builder::<()>::new()
        .name("Add")
        .description("Add two numbers")
        .positional(|argument| argument.variable(&mut left))
        .positional(|argument| argument.variable(&mut right))
        .build()?
        .parse(Flags::REQUIRED | Flags::NO_DEFAULT)?;

    println!("{}", left + right);
    Ok(())
}
