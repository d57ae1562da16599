//! Small collection helpers

use std::collections::HashMap;
use std::hash::Hash;

/// Merge two maps, keeping the larger value when a key appears in both
///
/// `initial` is left untouched; the result starts as a copy of it.
///
/// ```rust
/// use ryanair::util::merge_max;
/// use std::collections::HashMap;
///
/// let initial = HashMap::from([("a", 10), ("b", 20), ("c", 30)]);
/// let other = HashMap::from([("b", 25), ("c", 15), ("d", 40)]);
///
/// let merged = merge_max(&initial, &other);
/// assert_eq!(merged, HashMap::from([("a", 10), ("b", 25), ("c", 30), ("d", 40)]));
/// ```
pub fn merge_max<K, V>(initial: &HashMap<K, V>, other: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Ord + Clone,
{
    let mut merged = initial.clone();

    for (key, value) in other {
        merged
            .entry(key.clone())
            .and_modify(|current| {
                if *value > *current {
                    *current = value.clone();
                }
            })
            .or_insert_with(|| value.clone());
    }

    merged
}

/// Longest string by character count
///
/// Ties go to the first candidate; an empty input yields `""`.
///
/// ```rust
/// use ryanair::util::longest;
///
/// let cities = ["Paris", "Rio de Janeiro", "Kuala Lumpur", "Wellington"];
/// assert_eq!(longest(cities), "Rio de Janeiro");
/// assert_eq!(longest(Vec::<&str>::new()), "");
/// ```
pub fn longest<'a, I>(words: I) -> &'a str
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .map(|word| (word.chars().count(), word))
        .fold(None, |best: Option<(usize, &str)>, candidate| match best {
            Some(best) if best.0 >= candidate.0 => Some(best),
            _ => Some(candidate),
        })
        .map_or("", |(_, word)| word)
}
