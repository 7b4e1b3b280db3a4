use checkito::*;
use clue::{style::Item, Text};
use std::{error, result};

type Result = result::Result<(), Box<dyn error::Error>>;
const COUNT: usize = 1000;

#[test]
fn natural_keeps_every_word() -> Result {
    (regex!("[a-z]{1,12}([ \t]{1,3}[a-z]{1,12}){0,30}"), 20usize..100).check(COUNT, |(prose, width)| {
        let mut text = Text::default().with_width(width.clone());
        text.natural(0, Item::Help, &prose).unwrap();
        text.as_str().split_whitespace().eq(prose.split_whitespace())
    })?;
    Ok(())
}

#[test]
fn natural_respects_width() -> Result {
    (regex!("[a-z]{1,12}( [a-z]{1,12}){0,30}"), 20usize..100, 0usize..8).check(COUNT, |(prose, width, indent)| {
        let (width, indent) = (width.clone(), indent.clone());
        let mut text = Text::default().with_width(width);
        text.natural(indent, Item::Help, &prose).unwrap();
        let lines: Vec<_> = text.as_str().split('\n').collect();
        lines.iter().all(|line| line.chars().count() <= width)
            && lines[1..].iter().all(|line| {
                line.len() > indent
                    && line[..indent].chars().all(|letter| letter == ' ')
                    && !line[indent..].starts_with(' ')
            })
    })?;
    Ok(())
}

#[test]
fn natural_never_splits_long_words() -> Result {
    (regex!("[a-z]{30,40}"), 10usize..20).check(COUNT, |(word, width)| {
        let mut text = Text::default().with_width(width.clone());
        text.natural(2, Item::Help, &format!("{word} {word}")).unwrap();
        text.as_str() == format!("{word}\n  {word}")
    })?;
    Ok(())
}

#[test]
fn atomic_units_stay_whole() -> Result {
    (regex!("[a-z]{1,16}"), 1usize..40, 40usize..100).check(COUNT, |(unit, repeat, width)| {
        let (repeat, width) = (repeat.clone(), width.clone());
        let unit = format!(" [{unit}]");
        let mut text = Text::default().with_width(width);
        text.atomic(0, Item::Usage, "usage: tool").unwrap();
        for _ in 0..repeat {
            text.atomic(11, Item::Argument, &unit).unwrap();
        }
        let lines: Vec<_> = text.as_str().split('\n').collect();
        let body = lines[0].strip_prefix("usage: tool").unwrap_or_default().to_string()
            + &lines[1..].iter().map(|line| &line[11..]).collect::<String>();
        body == unit.repeat(repeat)
            && lines.iter().all(|line| line.chars().count() <= width)
    })?;
    Ok(())
}

#[test]
fn literal_newlines_restart_lines() -> Result {
    regex!("[a-z]{1,10}(\n[a-z]{1,10}){1,5}").check(COUNT, |prose| {
        let mut text = Text::default();
        text.natural(3, Item::Description, &prose).unwrap();
        let expected = prose.replace('\n', "\n   ");
        text.as_str() == expected
    })?;
    Ok(())
}
