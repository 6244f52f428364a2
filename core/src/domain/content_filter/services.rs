use std::borrow::Cow;

use regex::{NoExpand, Regex, RegexBuilder};
use tracing::warn;

use crate::domain::content_filter::policies::ForbiddenTermSet;

pub const SUBSTITUTE_PHRASE: &str = "tofu / lentils / soya chunks";

/// Replaces every case-insensitive occurrence of a forbidden term with
/// `substitute`, repeating until the text no longer contains any term.
///
/// Matching is on substrings, not words: with `egg` forbidden, "eggplant"
/// becomes "<substitute>plant". A replacement can complete a term together
/// with the text next to it ("chunks" + "hrimp"), which the next pass removes.
/// Terms that fit inside a run of substitutes are skipped, since they would
/// never stop matching.
pub fn filter(text: &str, terms: &ForbiddenTermSet, substitute: &str) -> String {
    if text.is_empty() || terms.is_empty() {
        return text.to_string();
    }

    let substitute_lowered = substitute.to_lowercase();
    let usable: Vec<&str> = terms
        .iter()
        .filter(|term| {
            let reforms = fits_inside_substitutes(term, &substitute_lowered);
            if reforms {
                warn!("Skipping forbidden term {:?}: it occurs in the substitute", term);
            }
            !reforms
        })
        .collect();

    if usable.is_empty() {
        return text.to_string();
    }

    match build_pattern(usable.iter().copied()) {
        Ok(pattern) => rewrite_until_stable(text, &[pattern], substitute),
        Err(e) => {
            warn!("Combined forbidden-term pattern rejected, matching term by term: {}", e);
            let patterns: Vec<Regex> = usable
                .iter()
                .filter_map(|term| build_pattern(std::iter::once(*term)).ok())
                .collect();
            rewrite_until_stable(text, &patterns, substitute)
        }
    }
}

/// True when `term` matches somewhere in back-to-back copies of `substitute`.
/// Both are expected lowercased.
pub(crate) fn fits_inside_substitutes(term: &str, substitute: &str) -> bool {
    if substitute.is_empty() {
        return false;
    }

    let copies = term.len() / substitute.len() + 2;
    substitute.repeat(copies).contains(term)
}

// Every match holds at least one character of the input that no earlier
// pass replaced, so a pass that changes anything shrinks what is left of the
// input. The input length therefore bounds the number of productive passes.
fn rewrite_until_stable(text: &str, patterns: &[Regex], substitute: &str) -> String {
    let max_passes = text.len() + 1;
    let mut current = text.to_string();

    for _ in 0..max_passes {
        let mut changed = false;

        for pattern in patterns {
            let replaced = match pattern.replace_all(&current, NoExpand(substitute)) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            current = replaced;
            changed = true;
        }

        if !changed {
            return current;
        }
    }

    warn!("Forbidden-term filtering did not settle after {} passes", max_passes);
    current
}

/// Longest terms first so that, at a given position, "eggs" wins over "egg".
fn build_pattern<'a>(terms: impl Iterator<Item = &'a str>) -> Result<Regex, regex::Error> {
    let mut terms: Vec<&str> = terms.collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = terms
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join("|");

    RegexBuilder::new(&alternation).case_insensitive(true).build()
}
