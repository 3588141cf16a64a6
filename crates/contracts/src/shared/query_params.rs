use std::collections::BTreeMap;

/// Remove parameters whose value is an empty string
pub fn filter_empty_params(params: BTreeMap<String, String>) -> BTreeMap<String, String> {
    params
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_removes_empty_values() {
        let input = map(&[("a", "value"), ("b", ""), ("c", "another value"), ("d", "")]);
        assert_eq!(
            filter_empty_params(input),
            map(&[("a", "value"), ("c", "another value")])
        );
    }

    #[test]
    fn test_keeps_non_empty_map_intact() {
        let input = map(&[("a", "value"), ("b", "another value")]);
        assert_eq!(filter_empty_params(input.clone()), input);
    }
}
