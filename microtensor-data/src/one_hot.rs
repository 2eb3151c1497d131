use std::collections::BTreeMap;

/// Maps every distinct label to a one-hot vector.
///
/// Labels are sorted and deduplicated first; the `i`-th label in sorted
/// order gets a vector with a 1 at position `i`. Every vector has one slot
/// per distinct label.
pub fn one_hot_encode<S: AsRef<str>>(labels: &[S]) -> BTreeMap<String, Vec<f64>> {
    let mut sorted: Vec<&str> = labels.iter().map(|label| label.as_ref()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let width = sorted.len();
    sorted
        .into_iter()
        .enumerate()
        .map(|(position, label)| {
            let mut encoded = vec![0.0; width];
            encoded[position] = 1.0;
            (label.to_string(), encoded)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_sorted_positions() {
        let encoded = one_hot_encode(&["7", "0", "3"]);
        assert_eq!(encoded.len(), 3);
        assert_eq!(encoded["0"], vec![1.0, 0.0, 0.0]);
        assert_eq!(encoded["3"], vec![0.0, 1.0, 0.0]);
        assert_eq!(encoded["7"], vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_one_hot_deduplicates() {
        let labels = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let encoded = one_hot_encode(&labels);
        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded["a"], vec![1.0, 0.0]);
        assert_eq!(encoded["b"], vec![0.0, 1.0]);
    }

    #[test]
    fn test_one_hot_empty() {
        let labels: [&str; 0] = [];
        assert!(one_hot_encode(&labels).is_empty());
    }
}
