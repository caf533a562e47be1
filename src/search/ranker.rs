use std::cmp::Ordering;

use regex::Regex;

use crate::cards::owned_card::OwnedCard;
use crate::scryfall::card_info::CardInfo;

/// Anything with a card name the ranker can score.
pub trait NamedCard {
    fn card_name(&self) -> &str;
}

impl NamedCard for CardInfo {
    fn card_name(&self) -> &str {
        &self.name
    }
}

impl NamedCard for OwnedCard {
    fn card_name(&self) -> &str {
        &self.name
    }
}

impl NamedCard for String {
    fn card_name(&self) -> &str {
        self
    }
}

impl NamedCard for &str {
    fn card_name(&self) -> &str {
        self
    }
}

/// How closely a single name matches the query, precomputed once per
/// element so the sort stays cheap.
struct RelevanceKey {
    exact: bool,
    prefix: bool,
    whole_word: bool,
    first_index: usize,
    name_len: usize,
    name_lower: String,
    name: String,
}

impl RelevanceKey {
    fn new(name: &str, query_lower: &str, word_pattern: Option<&Regex>) -> Self {
        let name_lower = name.to_lowercase();
        RelevanceKey {
            exact: name_lower == query_lower,
            prefix: name_lower.starts_with(query_lower),
            whole_word: word_pattern.map(|re| re.is_match(name)).unwrap_or(false),
            first_index: name_lower.find(query_lower).unwrap_or(usize::MAX),
            name_len: name.chars().count(),
            name_lower,
            name: name.to_string(),
        }
    }

    /// Priority chain: the first discriminator that differs decides. Better
    /// matches come first; the name fallback keeps the order total and
    /// independent of input order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .exact
            .cmp(&self.exact)
            .then(other.prefix.cmp(&self.prefix))
            .then(other.whole_word.cmp(&self.whole_word))
            .then(self.first_index.cmp(&other.first_index))
            .then(self.name_len.cmp(&other.name_len))
            .then_with(|| self.name_lower.cmp(&other.name_lower))
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Orders catalog search hits by closeness to the query: exact match, then
/// prefix, then whole-word, then earliest occurrence, then shortest name,
/// then alphabetical. Non-matching hits are kept and sort after all
/// matching ones. The query is taken as a literal string; regex
/// metacharacters in it are escaped, never interpreted.
///
/// Callers only invoke this for queries of at least
/// `CONFIG.min_query_length` characters.
pub fn rank_by_relevance<T: NamedCard>(hits: Vec<T>, query: &str) -> Vec<T> {
    let query_lower = query.to_lowercase();
    let word_pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(query))).ok();

    let mut keyed: Vec<(RelevanceKey, T)> = hits
        .into_iter()
        .map(|hit| {
            let key = RelevanceKey::new(hit.card_name(), &query_lower, word_pattern.as_ref());
            (key, hit)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, hit)| hit).collect()
}
