use std::collections::BTreeSet;

use crate::domain::{
    content_filter::services::{SUBSTITUTE_PHRASE, fits_inside_substitutes},
    plan::entities::FoodPreference,
};

const VEGETARIAN_FORBIDDEN: [&str; 11] = [
    "chicken", "mutton", "beef", "pork", "lamb", "fish", "prawn", "shrimp", "crab", "meat", "egg",
];

/// Added on top of the vegetarian list for vegan plans.
const VEGAN_EXTRA_FORBIDDEN: [&str; 7] = [
    "milk", "cheese", "butter", "ghee", "paneer", "yogurt", "honey",
];

const RESTRICTION_PLACEHOLDERS: [&str; 4] = ["none", "nil", "nothing", "n/a"];

const MIN_RESTRICTION_TERM_LEN: usize = 3;

/// Lowercased terms that must not survive in a generated plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForbiddenTermSet {
    terms: BTreeSet<String>,
}

impl ForbiddenTermSet {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|term| term.as_ref().trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        Self { terms }
    }

    /// Terms for the preference, plus whatever the free-text restrictions add.
    pub fn for_profile(preference: FoodPreference, restrictions: &str) -> Self {
        forbidden_terms(preference).union(&restriction_terms(restrictions))
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            terms: self.terms.union(&other.terms).cloned().collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.to_lowercase())
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.terms.is_superset(&other.terms)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

pub fn forbidden_terms(preference: FoodPreference) -> ForbiddenTermSet {
    match preference {
        FoodPreference::Vegetarian => ForbiddenTermSet::from_terms(VEGETARIAN_FORBIDDEN),
        FoodPreference::Vegan => ForbiddenTermSet::from_terms(
            VEGETARIAN_FORBIDDEN
                .iter()
                .chain(VEGAN_EXTRA_FORBIDDEN.iter()),
        ),
        FoodPreference::Omnivore | FoodPreference::Unspecified => ForbiddenTermSet::default(),
    }
}

/// Splits a free-text restriction list ("nuts, no dairy and soy") into terms.
///
/// Fragments that fit inside back-to-back substitute phrases ("soya",
/// "kstofu") are dropped; they would match the replacement text forever.
/// Fragments that only share an edge with the substitute ("shellfish") are
/// kept, since every match still consumes part of the original text.
pub fn restriction_terms(restrictions: &str) -> ForbiddenTermSet {
    let lowered = restrictions.to_lowercase();
    let substitute = SUBSTITUTE_PHRASE.to_lowercase();

    let terms = lowered
        .split([',', ';', '/', '\n', '\r'])
        .flat_map(|chunk| chunk.split(" and "))
        .map(|chunk| chunk.trim_matches(|c: char| !c.is_alphanumeric()))
        .map(|chunk| chunk.strip_prefix("no ").unwrap_or(chunk).trim())
        .filter(|term| term.chars().count() >= MIN_RESTRICTION_TERM_LEN)
        .filter(|term| !RESTRICTION_PLACEHOLDERS.contains(term))
        .filter(|term| !fits_inside_substitutes(term, &substitute));

    ForbiddenTermSet::from_terms(terms)
}
