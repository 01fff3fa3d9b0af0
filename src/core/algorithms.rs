//! Sort and search algorithms shared by every store implementation
//!
//! The algorithms operate on plain slices/vectors plus a comparator, so the
//! linked and array stores only differ in how they present their records:
//! the array store hands over its backing `Vec` directly, while the linked
//! store sorts a vector of node indices and relinks afterwards.

use std::cmp::Ordering;

/// Result of a binary search with duplicate expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// Whether at least one element matched
    pub found: bool,
    /// Number of matching elements in the duplicate cluster
    pub matches: usize,
}

impl SearchOutcome {
    pub fn hit(matches: usize) -> Self {
        SearchOutcome {
            found: true,
            matches,
        }
    }

    pub fn miss() -> Self {
        SearchOutcome::default()
    }
}

/// Stable top-down merge sort
///
/// Splits the vector into halves, sorts each half recursively and merges them.
/// When `compare` reports two elements as equal the one from the left run is
/// taken first, so elements with equal keys keep their relative order.
///
/// O(n log n) comparisons, O(n) auxiliary space.
pub fn merge_sort_by<T, F>(items: &mut Vec<T>, compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let run = std::mem::take(items);
    *items = sort_run(run, &compare);
}

fn sort_run<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = sort_run(items, compare);
    let right = sort_run(right, compare);

    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

/// Binary search that counts the whole cluster of equal elements
///
/// `probe` compares an element against the query (like
/// [`slice::binary_search_by`]). Once any equal element is found at `mid`,
/// the scan walks outward in both directions while neighbours still compare
/// equal and counts them all.
///
/// The slice must already be ordered consistently with `probe`. This is not
/// checked: on unordered input the result is unspecified.
///
/// O(log n + d) where d is the size of the duplicate cluster.
pub fn binary_search_by<T, F>(items: &[T], probe: F) -> SearchOutcome
where
    F: Fn(&T) -> Ordering,
{
    if items.is_empty() {
        return SearchOutcome::miss();
    }

    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;

        match probe(&items[mid]) {
            Ordering::Equal => {
                let before = items[..mid]
                    .iter()
                    .rev()
                    .take_while(|&item| probe(item) == Ordering::Equal)
                    .count();
                let after = items[mid + 1..]
                    .iter()
                    .take_while(|&item| probe(item) == Ordering::Equal)
                    .count();
                return SearchOutcome::hit(1 + before + after);
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    SearchOutcome::miss()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        merge_sort_by(&mut items, |a, b| a.cmp(b));
        items
    }

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::single(vec!["a"], vec!["a"])]
    #[case::two_reversed(vec!["b", "a"], vec!["a", "b"])]
    #[case::odd_length(vec!["m", "c", "x", "a", "k"], vec!["a", "c", "k", "m", "x"])]
    #[case::duplicates(vec!["b", "a", "b", "a"], vec!["a", "a", "b", "b"])]
    #[case::already_sorted(vec!["a", "b", "c"], vec!["a", "b", "c"])]
    #[case::case_sensitive(vec!["berlin", "Tokyo", "Berlin"], vec!["Berlin", "Tokyo", "berlin"])]
    fn test_merge_sort(#[case] input: Vec<&str>, #[case] expected: Vec<&str>) {
        assert_eq!(sorted(input), expected);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e'), (0, 'f')];
        merge_sort_by(&mut items, |a, b| a.0.cmp(&b.0));

        assert_eq!(
            items,
            vec![(0, 'f'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]
        );
    }

    #[test]
    fn test_merge_sort_large_input_matches_std_sort() {
        let mut items: Vec<u32> = (0..1000).map(|i| (i * 7919) % 503).collect();
        let mut expected = items.clone();
        expected.sort();

        merge_sort_by(&mut items, |a, b| a.cmp(b));
        assert_eq!(items, expected);
    }

    #[rstest]
    #[case::empty(vec![], "a", SearchOutcome { found: false, matches: 0 })]
    #[case::single_hit(vec!["a"], "a", SearchOutcome { found: true, matches: 1 })]
    #[case::single_miss(vec!["a"], "b", SearchOutcome { found: false, matches: 0 })]
    #[case::first(vec!["a", "b", "c", "d"], "a", SearchOutcome { found: true, matches: 1 })]
    #[case::last(vec!["a", "b", "c", "d"], "d", SearchOutcome { found: true, matches: 1 })]
    #[case::below_range(vec!["b", "c"], "a", SearchOutcome { found: false, matches: 0 })]
    #[case::above_range(vec!["b", "c"], "z", SearchOutcome { found: false, matches: 0 })]
    #[case::gap(vec!["a", "c", "e"], "d", SearchOutcome { found: false, matches: 0 })]
    #[case::cluster_middle(vec!["a", "b", "b", "b", "c"], "b", SearchOutcome { found: true, matches: 3 })]
    #[case::cluster_left_edge(vec!["a", "a", "a", "b", "c", "d", "e"], "a", SearchOutcome { found: true, matches: 3 })]
    #[case::cluster_right_edge(vec!["a", "b", "c", "d", "d", "d"], "d", SearchOutcome { found: true, matches: 3 })]
    #[case::all_equal(vec!["x", "x", "x", "x", "x"], "x", SearchOutcome { found: true, matches: 5 })]
    #[case::exact_match_only(vec!["Tokyo", "tokyo"], "Tokyo", SearchOutcome { found: true, matches: 1 })]
    fn test_binary_search(
        #[case] items: Vec<&str>,
        #[case] query: &str,
        #[case] expected: SearchOutcome,
    ) {
        let outcome = binary_search_by(&items, |item| item.cmp(&query));
        assert_eq!(outcome, expected);
    }

    #[test]
    fn test_binary_search_agrees_with_linear_count() {
        let items = sorted(vec![
            "Dubai", "Tokyo", "Berlin", "Tokyo", "London", "Dubai", "Tokyo", "Sydney",
        ]);

        for query in ["Berlin", "Dubai", "London", "Sydney", "Tokyo", "Paris"] {
            let expected = items.iter().filter(|&&item| item == query).count();
            let outcome = binary_search_by(&items, |item| item.cmp(&query));
            assert_eq!(outcome.matches, expected, "query {}", query);
            assert_eq!(outcome.found, expected > 0, "query {}", query);
        }
    }
}
