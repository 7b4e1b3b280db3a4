use clue::{style::Colored, Builder, Flags};
use std::{borrow::Cow, error};

const DESCRIPTION: &str = "This is a test program for testing command line parsing and all the \
    different ways one might want to parse things.\n\nOur tenets for the parser are:\
    \n    1. Great for the command line user\
    \n    2. Great for the command line programmer\
    \n    3. Understandable for us to program and maintain";

struct Arguments {
    hello: bool,
    int: i32,
    float: f32,
    double: f64,
    name: String,
    name_view: Cow<'static, str>,
    veci: [i32; 3],
    vecf: [f32; 3],
    quat: [f64; 4],
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            hello: false,
            int: 0,
            float: 0.0,
            double: 0.0,
            name: "default".into(),
            name_view: Cow::Borrowed(""),
            veci: [1, 2, 3],
            vecf: [1.0, 2.0, 3.0],
            quat: [0.0; 4],
        }
    }
}

#[derive(Default)]
struct Raw {
    hello: bool,
    int: i32,
    float: f32,
    double: f64,
    string: String,
    veci: [i32; 3],
    vecf: [f32; 3],
    vecd: [f64; 3],
    view: Cow<'static, str>,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let mut raw = Raw::default();
    let result = Builder::<Arguments>::new()
        .name("Features")
        .description(DESCRIPTION)
        .style(Colored)
        .optional(|argument| argument.name("hello").field(|arguments| &mut arguments.hello).help("say hello"))
        .optional(|argument| argument.name("veci").field(|arguments| &mut arguments.veci).help("3 int point"))
        .optional(|argument| argument.name("vecf").field(|arguments| &mut arguments.vecf).help("3 float point"))
        .optional(|argument| argument.name("quat").field(|arguments| &mut arguments.quat).help("A quaternion"))
        .optional(|argument| {
            argument.name("int").field(|arguments| &mut arguments.int).help(
                "The description of this arg is just way to long to be useful but we're using it \
                 here to test if line breaking is working as expected for variable descriptions. \
                 Does it?",
            )
        })
        .optional(|argument| argument.name("float").field(|arguments| &mut arguments.float).help("A float"))
        .optional(|argument| argument.name("double").field(|arguments| &mut arguments.double).help("A double"))
        .optional(|argument| argument.name("name").field(|arguments| &mut arguments.name).help("A name"))
        .optional(|argument| argument.name("name_view").field(|arguments| &mut arguments.name_view).help("Also a name"))
        .optional(|argument| argument.name("raw_veci").variable(&mut raw.veci).help("A \"raw veci\""))
        .optional(|argument| {
            argument
                .name("raw_hello")
                .variable(&mut raw.hello)
                .help("Another way of saying hello, but to a bool, not a member")
        })
        .optional(|argument| {
            argument
                .name("raw_int")
                .variable(&mut raw.int)
                .help("Another way of passing an integer, also not a member")
        })
        .optional(|argument| argument.name("raw_float").variable(&mut raw.float).help("Floats that are raw"))
        .optional(|argument| argument.name("raw_double").variable(&mut raw.double).help("Double"))
        .optional(|argument| argument.name("raw_string").variable(&mut raw.string).help("A string value"))
        .optional(|argument| argument.name("raw_vecf").variable(&mut raw.vecf).help("A 3 float vector"))
        .optional(|argument| argument.name("raw_vecd").variable(&mut raw.vecd).help("A 3 double vector"))
        .optional(|argument| {
            argument
                .name("raw_strview")
                .variable(&mut raw.view)
                .help("Another string view to finish it all off")
        })
        .build()?
        .parse(Flags::NO_EXIT_ON_ERROR);

    let arguments = match result {
        Ok(arguments) => arguments,
        Err(failure) => {
            eprintln!("{failure}");
            println!("Arg parsing failed");
            failure.value
        }
    };
    println!("Args:");
    println!("  hello = {}", arguments.hello);
    println!("  i = {}", arguments.int);
    println!("  f = {}", arguments.float);
    println!("  d = {}", arguments.double);
    println!("  veci[1] = {}", arguments.veci[1]);
    println!("  vecf = {:?}", arguments.vecf);
    println!("  quat = {:?}", arguments.quat);
    println!("  s = {}", arguments.name);
    println!("  sv = {}", arguments.name_view);

    println!("hello = {}", raw.hello);
    println!("i = {}", raw.int);
    println!("f = {}", raw.float);
    println!("d = {}", raw.double);
    println!("s = {}", raw.string);
    println!("str_view = {}", raw.view);
    println!("veci = {:?}", raw.veci);
    println!("vecf = {:?}", raw.vecf);
    println!("vecd = {:?}", raw.vecd);
    Ok(())
}
