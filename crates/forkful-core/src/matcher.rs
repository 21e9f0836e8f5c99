//! Ingredient match ranking.
//!
//! Given the user's ingredient list and a snapshot of candidate recipes,
//! produces the candidates ranked by ingredient overlap. Matching is
//! bidirectional substring containment over normalized strings, so "tomato"
//! finds "tomatoes" and "chicken" finds "chicken breast". The flip side is
//! that short terms over-match ("pea" finds "peanut"); that permissiveness is
//! intentional and pinned by tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::CandidateRecipe;

/// A candidate paired with how well it matched the query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate: CandidateRecipe,
    /// Number of distinct query ingredients found in the candidate.
    pub match_count: usize,
    /// `match_count` divided by the number of distinct query ingredients.
    pub match_percentage: f64,
}

/// Rank `candidates` against the user's `query` ingredients, best first.
///
/// With an empty (or all-blank) query there is nothing to rank, so up to
/// `limit` candidates are sampled at random instead; this is the discovery
/// mode behind "show me something". Use [`rank_with_rng`] to make that path
/// deterministic in tests.
pub fn rank(candidates: &[CandidateRecipe], query: &[String], limit: usize) -> Vec<MatchResult> {
    rank_with_rng(candidates, query, limit, &mut rand::thread_rng())
}

/// [`rank`] with an injected RNG for the discovery-mode fallback.
pub fn rank_with_rng<R: Rng + ?Sized>(
    candidates: &[CandidateRecipe],
    query: &[String],
    limit: usize,
    rng: &mut R,
) -> Vec<MatchResult> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let terms = normalize_terms(query);

    if terms.is_empty() {
        // Discovery mode: sample without replacement.
        return candidates
            .choose_multiple(rng, limit)
            .map(|candidate| MatchResult {
                candidate: candidate.clone(),
                match_count: 0,
                match_percentage: 0.0,
            })
            .collect();
    }

    let mut results: Vec<MatchResult> = candidates
        .iter()
        .filter_map(|candidate| {
            let match_count = count_matched_terms(candidate, &terms);
            (match_count > 0).then(|| MatchResult {
                candidate: candidate.clone(),
                match_count,
                match_percentage: match_count as f64 / terms.len() as f64,
            })
        })
        .collect();

    // sort_by is stable, so full ties keep the original candidate order.
    results.sort_by(|a, b| {
        b.match_percentage
            .total_cmp(&a.match_percentage)
            .then(b.match_count.cmp(&a.match_count))
    });
    results.truncate(limit);
    results
}

/// Trim, lowercase, and dedup the query terms, preserving first-seen order.
/// The deduplicated count is the percentage denominator, so repeating a term
/// cannot skew scores.
fn normalize_terms(query: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(query.len());
    for raw in query {
        let term = raw.trim().to_lowercase();
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Count how many distinct query terms hit at least one candidate ingredient.
/// A term hits when it contains, or is contained in, the normalized
/// ingredient string.
fn count_matched_terms(candidate: &CandidateRecipe, terms: &[String]) -> usize {
    let ingredients: Vec<String> = candidate
        .ingredients
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();

    terms
        .iter()
        .filter(|term| {
            ingredients
                .iter()
                .any(|ing| ing.contains(term.as_str()) || term.contains(ing.as_str()))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uuid::Uuid;

    fn candidate(ingredients: &[&str]) -> CandidateRecipe {
        CandidateRecipe {
            id: Uuid::new_v4(),
            cuisine: None,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn query(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|s| s.to_string()).collect()
    }

    fn two_candidates() -> Vec<CandidateRecipe> {
        vec![
            candidate(&["chicken breast", "garlic"]),
            candidate(&["beef", "onion"]),
        ]
    }

    #[test]
    fn single_term_excludes_non_matching_candidates() {
        let candidates = two_candidates();
        let results = rank(&candidates, &query(&["chicken"]), 5);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate.id, candidates[0].id);
        assert_eq!(results[0].match_count, 1);
        assert_eq!(results[0].match_percentage, 1.0);
    }

    #[test]
    fn tie_broken_by_original_candidate_order() {
        let candidates = two_candidates();
        let results = rank(&candidates, &query(&["chicken", "onion"]), 5);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].candidate.id, candidates[0].id);
        assert_eq!(results[1].candidate.id, candidates[1].id);
        for r in &results {
            assert_eq!(r.match_count, 1);
            assert_eq!(r.match_percentage, 0.5);
        }
    }

    #[test]
    fn higher_percentage_ranks_first() {
        let candidates = vec![
            candidate(&["beef", "onion"]),
            candidate(&["chicken breast", "onion", "garlic"]),
        ];
        let results = rank(&candidates, &query(&["chicken", "garlic", "onion"]), 5);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].candidate.id, candidates[1].id);
        assert_eq!(results[0].match_count, 3);
        assert_eq!(results[1].match_count, 1);
    }

    #[test]
    fn results_sorted_non_increasing() {
        let candidates = vec![
            candidate(&["flour"]),
            candidate(&["chicken", "garlic", "lemon"]),
            candidate(&["chicken", "rice"]),
            candidate(&["garlic", "lemon", "rice"]),
        ];
        let results = rank(&candidates, &query(&["chicken", "garlic", "lemon", "rice"]), 10);

        for pair in results.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
            if pair[0].match_percentage == pair[1].match_percentage {
                assert!(pair[0].match_count >= pair[1].match_count);
            }
        }
        // "flour" matched nothing and must be gone.
        assert_eq!(results.len(), 3);
        for r in &results {
            assert!(r.match_count >= 1);
        }
    }

    #[test]
    fn empty_candidates_returns_empty() {
        assert!(rank(&[], &query(&["chicken"]), 5).is_empty());
    }

    #[test]
    fn zero_limit_returns_empty() {
        assert!(rank(&two_candidates(), &query(&["chicken"]), 0).is_empty());
    }

    #[test]
    fn limit_truncates_results() {
        let candidates = vec![
            candidate(&["chicken"]),
            candidate(&["chicken", "garlic"]),
            candidate(&["chicken", "rice"]),
        ];
        let results = rank(&candidates, &query(&["chicken"]), 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn unmatched_term_is_not_an_error() {
        let candidates = two_candidates();
        let results = rank(&candidates, &query(&["chicken", "saffron"]), 5);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_count, 1);
        assert_eq!(results[0].match_percentage, 0.5);
    }

    #[test]
    fn normalization_is_case_and_whitespace_insensitive() {
        let candidates = vec![candidate(&["  Chicken Breast ", "GARLIC"])];
        let results = rank(&candidates, &query(&["  CHICKEN  ", "garlic"]), 5);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_count, 2);
        assert_eq!(results[0].match_percentage, 1.0);
    }

    #[test]
    fn containment_is_bidirectional() {
        // Query term inside the ingredient, and ingredient inside the term.
        let candidates = vec![candidate(&["tomatoes"]), candidate(&["tomato"])];
        let results = rank(&candidates, &query(&["tomato"]), 5);
        assert_eq!(results.len(), 2);

        let results = rank(&candidates, &query(&["tomatoes"]), 5);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn short_terms_match_longer_ingredients() {
        // Documented trade-off of the containment heuristic.
        let candidates = vec![candidate(&["peanut butter"])];
        let results = rank(&candidates, &query(&["pea"]), 5);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn duplicate_terms_do_not_skew_percentage() {
        let candidates = two_candidates();
        let results = rank(&candidates, &query(&["chicken", "Chicken", " chicken "]), 5);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_count, 1);
        assert_eq!(results[0].match_percentage, 1.0);
    }

    #[test]
    fn blank_terms_are_ignored() {
        let candidates = two_candidates();
        let results = rank(&candidates, &query(&["chicken", "", "   "]), 5);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_percentage, 1.0);
    }

    #[test]
    fn empty_query_samples_distinct_candidates() {
        let candidates: Vec<CandidateRecipe> = (0..10).map(|_| candidate(&["flour"])).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let results = rank_with_rng(&candidates, &[], 4, &mut rng);

        assert_eq!(results.len(), 4);
        let mut ids: Vec<Uuid> = results.iter().map(|r| r.candidate.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        for r in &results {
            assert_eq!(r.match_count, 0);
            assert_eq!(r.match_percentage, 0.0);
        }
    }

    #[test]
    fn empty_query_limit_exceeding_pool_returns_everything() {
        let candidates = two_candidates();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let results = rank_with_rng(&candidates, &[], 5, &mut rng);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn all_blank_query_falls_back_to_sampling() {
        let candidates = two_candidates();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let results = rank_with_rng(&candidates, &query(&["", "  "]), 1, &mut rng);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_count, 0);
    }

    #[test]
    fn blank_candidate_ingredients_never_match() {
        // An empty ingredient string must not act as a universal substring.
        let candidates = vec![candidate(&["", "  "])];
        let results = rank(&candidates, &query(&["chicken"]), 5);
        assert!(results.is_empty());
    }
}
