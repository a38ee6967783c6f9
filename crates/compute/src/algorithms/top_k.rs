use std::cmp::Reverse;

/// Keep the `k` items with the largest score, descending.
///
/// The sort is stable, so items with equal scores keep their input order.
/// Returns however many items exist when there are fewer than `k`.
pub fn top_k_by<T, S, F>(mut items: Vec<T>, k: usize, score: F) -> Vec<T>
where
    S: Ord,
    F: Fn(&T) -> S,
{
    items.sort_by_key(|item| Reverse(score(item)));
    items.truncate(k);
    items
}

/// [`top_k_by`] for floating-point scores. NaN scores rank as negative
/// infinity, below every finite score.
pub fn top_k_by_f64<T, F>(mut items: Vec<T>, k: usize, score: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let key = |item: &T| {
        let s = score(item);
        // `+ 0.0` folds -0.0 into 0.0 so the two tie.
        if s.is_nan() { f64::NEG_INFINITY } else { s + 0.0 }
    };
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
    items.truncate(k);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_and_truncated() {
        let out = top_k_by(vec![3, 9, 1, 7], 2, |x| *x);
        assert_eq!(out, vec![9, 7]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![("a", 1), ("b", 2), ("c", 1), ("d", 2)];
        let out = top_k_by(items, 10, |(_, s)| *s);
        assert_eq!(out, vec![("b", 2), ("d", 2), ("a", 1), ("c", 1)]);

        let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0), ("d", 2.0)];
        let out = top_k_by_f64(items, 10, |(_, s)| *s);
        assert_eq!(out, vec![("b", 2.0), ("d", 2.0), ("a", 1.0), ("c", 1.0)]);
    }

    #[test]
    fn k_zero_and_empty() {
        assert!(top_k_by(vec![1, 2], 0, |x| *x).is_empty());
        assert!(top_k_by(Vec::<i32>::new(), 5, |x| *x).is_empty());
        assert!(top_k_by_f64(Vec::<f64>::new(), 5, |x| *x).is_empty());
    }

    #[test]
    fn nan_scores_rank_last() {
        let items: Vec<(usize, f64)> = (0..40)
            .map(|i| (i, if i % 3 == 0 { f64::NAN } else { i as f64 }))
            .collect();
        let out = top_k_by_f64(items, 40, |(_, s)| *s);

        assert_eq!(out.len(), 40);
        assert_eq!(out[0], (38, 38.0));
        let first_nan = out.iter().position(|(_, s)| s.is_nan()).unwrap();
        assert!(out[first_nan..].iter().all(|(_, s)| s.is_nan()));
        assert!(out[..first_nan].windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let out = top_k_by_f64(vec![("a", -0.0), ("b", 0.0), ("c", 1.0)], 3, |(_, s)| *s);
        let ids: Vec<&str> = out.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
