//! Autocomplete ranking for employer names.
//!
//! Candidates are collected tier by tier, each tier de-duplicated against
//! the ones before it, until `limit` names are gathered. Within a tier,
//! registry order is preserved.

use super::domain::EmployerCategory;

/// Characters treated as token separators by the fuzzy tier.
const TOKEN_SEPARATORS: &[char] = &[' ', '-', '_', '.'];

pub(crate) fn rank_suggestions(
    entries: &[(String, EmployerCategory)],
    term: &str,
    limit: usize,
) -> Vec<String> {
    // `limit` comes straight off the query string; never allocate from it.
    let mut selected: Vec<usize> = Vec::with_capacity(limit.min(entries.len()));

    let tiers: [&dyn Fn(&str) -> bool; 6] = [
        &|name| name == term,
        &|name| name.starts_with(term),
        &|name| name.split_whitespace().next() == Some(term),
        &|name| name.split_whitespace().any(|word| word.starts_with(term)),
        &|name| name.contains(term),
        &|name| {
            name.split(TOKEN_SEPARATORS)
                .any(|token| token.contains(term))
        },
    ];

    'outer: for tier in tiers {
        for (index, (name, _)) in entries.iter().enumerate() {
            if selected.len() >= limit {
                break 'outer;
            }
            if tier(name) && !selected.contains(&index) {
                selected.push(index);
            }
        }
    }

    selected
        .into_iter()
        .take(limit)
        .map(|index| proper_case(&entries[index].0))
        .collect()
}

/// Registry keys are stored lowercase; display names capitalize the first
/// letter of each word ("hdfc bank" -> "Hdfc Bank").
fn proper_case(key: &str) -> String {
    key.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
