use clue::{Builder, Composite, Flags};
use std::{borrow::Cow, error};

struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

struct Repeat {
    count: i32,
    phrase: Cow<'static, str>,
}

#[derive(Default)]
struct Arguments {
    vec: Vec3,
    repeat: Repeat,
}

impl Default for Vec3 {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        }
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Self {
            count: 3,
            phrase: Cow::Borrowed("Hello Clue!"),
        }
    }
}

impl Composite for Vec3 {
    type Parts = (f32, f32, f32);

    fn compose((x, y, z): Self::Parts) -> Self {
        Self { x, y, z }
    }

    fn decompose(&self) -> Self::Parts {
        (self.x, self.y, self.z)
    }
}

impl Composite for Repeat {
    type Parts = (i32, Cow<'static, str>);

    fn compose((count, phrase): Self::Parts) -> Self {
        Self { count, phrase }
    }

    fn decompose(&self) -> Self::Parts {
        (self.count, self.phrase.clone())
    }
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let arguments = Builder::<Arguments>::new()
        .name("User Types")
        .optional(|argument| {
            argument
                .name("vec")
                .composite(|arguments| &mut arguments.vec)
                .help("A 3 value Vector")
        })
        .optional(|argument| {
            argument
                .name("repeat")
                .composite(|arguments| &mut arguments.repeat)
                .help("Repeat a phrase N times")
        })
        .build()?
        .parse(Flags::NONE)?;

    let Vec3 { x, y, z } = arguments.vec;
    println!("Vec3({x}, {y}, {z})");
    for _ in 0..arguments.repeat.count {
        println!("{}", arguments.repeat.phrase);
    }
    Ok(())
}
