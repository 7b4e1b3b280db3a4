use clue::{Builder, Flags};
use std::{error, fmt::Display};

struct Arguments {
    unlimited: Vec<i32>,
    at_least_three: Vec<f32>,
    at_most_five: Vec<f64>,
    three_to_five: Vec<String>,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            unlimited: vec![1, 2],
            at_least_three: vec![4.0, 5.0, 6.0],
            at_most_five: vec![5.0, 4.0, 3.0, 2.0, 1.0],
            three_to_five: Vec::new(),
        }
    }
}

fn show<T: Display>(name: &str, values: &[T]) {
    let values: Vec<_> = values.iter().map(ToString::to_string).collect();
    println!("{name}=[{}]", values.join(","));
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let arguments = Builder::<Arguments>::new()
        .description("Collect lists of values.")
        .optional(|argument| {
            argument
                .name("unlimited")
                .field(|arguments| &mut arguments.unlimited)
                .help("An unlimited number of arguments")
        })
        .optional(|argument| {
            argument
                .name("atLeastThree")
                .field(|arguments| &mut arguments.at_least_three)
                .count(3..)
                .help("At least 3 arguments")
        })
        .optional(|argument| {
            argument
                .name("atMostFive")
                .field(|arguments| &mut arguments.at_most_five)
                .count(..=5)
                .help("At most 5 arguments")
        })
        .positional(|argument| {
            argument
                .name("threeToFive")
                .field(|arguments| &mut arguments.three_to_five)
                .count(3..=5)
                .help("3 to 5 arguments")
        })
        .build()?
        .parse(Flags::NONE)?;

    show("unlimited", &arguments.unlimited);
    show("atLeastThree", &arguments.at_least_three);
    show("atMostFive", &arguments.at_most_five);
    show("threeToFive", &arguments.three_to_five);
    Ok(())
}
