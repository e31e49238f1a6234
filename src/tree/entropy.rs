//! Entropy and information-gain computation over label-first rows.
//!
//! All grouping preserves first-seen order. The summation order of floating
//! point terms is therefore fixed by the input row order, which keeps split
//! selection and tie-breaking reproducible run to run.

/// Additive epsilon applied to every log2 result.
///
/// `p * log2(p)` for a class with probability exactly 1 would produce `-0`,
/// which prints as a negative zero entropy; the epsilon keeps the result a
/// hair above it. Zero probabilities never occur since counts come from
/// observed rows only.
const LOG_EPSILON: f64 = 1e-11;

#[inline]
fn log2(x: f64) -> f64 {
    x.ln() / std::f64::consts::LN_2 + LOG_EPSILON
}

/// Count distinct values in first-seen order.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match counts.iter().position(|(v, _)| *v == value) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

fn entropy_of_counts(counts: &[(&str, usize)], total: usize) -> f64 {
    let mut entropy = 0.0;
    for &(_, count) in counts {
        let p = count as f64 / total as f64;
        entropy += p * log2(p);
    }
    -entropy
}

/// Entropy `-Σ p·log2(p)` of the class-label distribution (column 0).
pub fn class_entropy(rows: &[Vec<String>]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let counts = value_counts(rows.iter().map(|r| r[0].as_str()));
    entropy_of_counts(&counts, rows.len())
}

/// Expected information after partitioning on `column`: the
/// `|Dv|/|D|`-weighted average class entropy over its value groups.
pub fn expected_information(rows: &[Vec<String>], column: usize) -> f64 {
    // Per attribute value, class counts of the rows carrying it.
    let mut groups: Vec<(&str, Vec<(&str, usize)>)> = Vec::new();
    for row in rows {
        let value = row[column].as_str();
        let class = row[0].as_str();

        let group = match groups.iter().position(|(v, _)| *v == value) {
            Some(i) => i,
            None => {
                groups.push((value, Vec::new()));
                groups.len() - 1
            }
        };
        let counts = &mut groups[group].1;
        match counts.iter().position(|(c, _)| *c == class) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((class, 1)),
        }
    }

    let total = rows.len();
    let mut sum = 0.0;
    for (_, counts) in &groups {
        let group_size: usize = counts.iter().map(|(_, n)| n).sum();
        sum += group_size as f64 / total as f64 * entropy_of_counts(counts, group_size);
    }
    sum
}

/// Reduction in class entropy achieved by partitioning on `column`.
pub fn information_gain(rows: &[Vec<String>], column: usize) -> f64 {
    class_entropy(rows) - expected_information(rows, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn single_class_entropy_is_zero() {
        let d = rows(&[&["yes", "a"], &["yes", "b"], &["yes", "a"]]);
        assert_relative_eq!(class_entropy(&d), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn even_binary_split_maximizes_entropy() {
        let d = rows(&[&["yes", "a"], &["no", "a"], &["yes", "b"], &["no", "b"]]);
        assert_relative_eq!(class_entropy(&d), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn skewed_distribution_entropy() {
        // 2x yes, 1x no: H = -(2/3·log2(2/3) + 1/3·log2(1/3)) ≈ 0.918296
        let d = rows(&[&["yes", "a"], &["no", "a"], &["yes", "b"]]);
        assert_relative_eq!(class_entropy(&d), 0.918_295_834_054, epsilon = 1e-9);
    }

    #[test]
    fn empty_dataset_entropy_is_zero() {
        assert_eq!(class_entropy(&[]), 0.0);
    }

    #[test]
    fn three_row_scenario_hand_computed() {
        // Label in column 0. Column 1 (sunny/rainy) leaves a mixed "sunny"
        // group; column 2 (hot/cool) separates the classes perfectly.
        let d = rows(&[
            &["yes", "sunny", "hot"],
            &["no", "sunny", "cool"],
            &["yes", "rainy", "hot"],
        ]);

        // E[info | col 1] = 2/3·H({yes,no}) + 1/3·H({yes}) = 2/3·1 = 0.6667
        assert_relative_eq!(expected_information(&d, 1), 2.0 / 3.0, epsilon = 1e-9);
        // E[info | col 2] = 2/3·H({yes,yes}) + 1/3·H({no}) = 0
        assert_relative_eq!(expected_information(&d, 2), 0.0, epsilon = 1e-9);

        assert_relative_eq!(
            information_gain(&d, 1),
            0.918_295_834_054 - 2.0 / 3.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(information_gain(&d, 2), 0.918_295_834_054, epsilon = 1e-9);
        assert!(information_gain(&d, 2) > information_gain(&d, 1));
    }

    #[rstest]
    #[case(&[&["yes", "a", "x"][..], &["no", "b", "x"][..], &["yes", "a", "y"][..]])]
    #[case(&[&["a", "1"][..], &["b", "1"][..], &["c", "1"][..], &["a", "2"][..]])]
    #[case(&[&["yes", "same"][..], &["no", "same"][..]])]
    fn information_gain_is_non_negative(#[case] raw: &[&[&str]]) {
        let d = rows(raw);
        for column in 1..d[0].len() {
            assert!(information_gain(&d, column) > -1e-9);
        }
    }
}
