use std::{mem::swap, ops::Deref};

/// Case-insensitive Levenshtein distances with reusable row buffers.
pub struct Spell {
    previous: Vec<usize>,
    current: Vec<usize>,
    left: Vec<char>,
    right: Vec<char>,
}

impl Spell {
    pub const fn new() -> Self {
        Self {
            previous: Vec::new(),
            current: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Distance below which a candidate counts as a likely misspelling of `word`.
    pub fn tolerance(word: &str) -> usize {
        (word.chars().count() / 3 + 1).min(3)
    }

    /// Candidates closer than `maximum` to `word`, nearest first.
    pub fn suggest<T: Deref<Target = str>>(
        &mut self,
        word: &str,
        dictionary: impl IntoIterator<Item = T>,
        maximum: usize,
    ) -> Vec<(T, usize)> {
        let dictionary = dictionary.into_iter();
        let mut results = Vec::with_capacity(dictionary.size_hint().0);
        for candidate in dictionary {
            let distance = self.distance(word, &candidate);
            if distance < maximum {
                results.push((candidate, distance));
            }
        }
        results.sort_by_key(|&(_, distance)| distance);
        results
    }

    pub fn distance(&mut self, left: &str, right: &str) -> usize {
        let Self {
            previous,
            current,
            left: lefts,
            right: rights,
        } = self;
        lefts.clear();
        lefts.extend(left.chars().flat_map(char::to_lowercase));
        rights.clear();
        rights.extend(right.chars().flat_map(char::to_lowercase));
        if lefts.len() > rights.len() {
            swap(lefts, rights);
        }

        previous.clear();
        previous.extend(0..=lefts.len());
        current.clear();
        current.resize(lefts.len() + 1, 0);

        for (i, right) in rights.iter().enumerate() {
            current[0] = i + 1;
            for (j, left) in lefts.iter().enumerate() {
                let insert = current[j] + 1;
                let delete = previous[j + 1] + 1;
                let replace = previous[j] + usize::from(left != right);
                current[j + 1] = insert.min(delete).min(replace);
            }
            swap(previous, current);
        }

        previous[lefts.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let mut spell = Spell::new();
        assert_eq!(spell.distance("-count", "-count"), 0);
        assert_eq!(spell.distance("-count", "-COUNT"), 0);
        assert_eq!(spell.distance("-count", "-cont"), 1);
        assert_eq!(spell.distance("-cont", "-count"), 1);
        assert_eq!(spell.distance("-count", "-counts"), 1);
        assert_eq!(spell.distance("-count", "-mount"), 1);
        assert_eq!(spell.distance("", "-help"), 5);
        assert_eq!(spell.distance("abc", "xyz"), 3);
    }

    #[test]
    fn nearest_first() {
        let best = Spell::new().suggest(
            "-mesage",
            ["-count", "-message", "-messages", "-verbose", "-age"],
            Spell::tolerance("-mesage"),
        );
        assert_eq!(best, [("-message", 1), ("-messages", 2)]);
    }

    #[test]
    fn short_words_tolerate_one_edit() {
        assert_eq!(Spell::tolerance("-x"), 1);
        assert_eq!(Spell::tolerance("-cont"), 2);
        assert_eq!(Spell::tolerance("-something-long"), 3);
    }
}
