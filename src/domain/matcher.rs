/// Points awarded for a hit that directly follows the previous one. Every
/// skipped label character between two hits costs one point.
const ADJACENT_HIT_POINTS: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuzzyMatch {
    pub score: i64,
    /// Character indices into the label, strictly increasing.
    pub indices: Vec<usize>,
}

/// Case-insensitive subsequence match of `query` against `label`.
///
/// Spaces in the query are ignored. Each hit scores `10 - dist`, where `dist`
/// is the number of label characters skipped since the previous hit; the
/// term is not clamped, so widely separated hits contribute negative points.
/// Returns `None` unless every query character is found in order.
#[must_use]
pub fn fuzzy_match(query: &str, label: &str) -> Option<FuzzyMatch> {
    let needle: Vec<char> = query
        .chars()
        .filter(|c| *c != ' ')
        .map(fold)
        .collect();

    let mut j = 0;
    let mut dist: i64 = 0;
    let mut score: i64 = 0;
    let mut indices = Vec::with_capacity(needle.len());

    for (i, c) in label.chars().enumerate() {
        let Some(&wanted) = needle.get(j) else {
            break;
        };
        if fold(c) == wanted {
            score += ADJACENT_HIT_POINTS - dist;
            indices.push(i);
            j += 1;
            dist = 0;
        } else {
            dist += 1;
        }
    }

    (j == needle.len()).then_some(FuzzyMatch { score, indices })
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
