use clue::{Builder, Flags};
use std::error;

struct Arguments {
    message: String,
    count: i32,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            message: "Hello Clue!".into(),
            count: 1,
        }
    }
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let arguments = Builder::<Arguments>::new()
        .description("Print a message count times.")
        .optional(|argument| {
            argument
                .name("count")
                .field(|arguments| &mut arguments.count)
                .help("Number of times to print the message")
        })
        .positional(|argument| {
            argument
                .name("message")
                .field(|arguments| &mut arguments.message)
                .help("A message to print")
        })
        .build()?
        .parse(Flags::NONE)?;

    for _ in 0..arguments.count {
        println!("{}", arguments.message);
    }
    Ok(())
}
