// Selection predicates over a DMR ID
//
// A DMR ID encodes its origin in its leading decimal digits: the first digit
// is the region and the first three digits are the country prefix. Prefixes
// are extracted arithmetically; an ID shorter than three digits yields the
// whole ID as its country prefix.

use std::collections::HashSet;

/// Leading `digits` decimal digits of `id`
pub fn leading_digits(id: u64, digits: u32) -> u64 {
    let limit = 10u64.pow(digits);
    let mut value = id;
    while value >= limit {
        value /= 10;
    }
    value
}

/// Region code of an ID (its first digit)
pub fn region_of(id: u64) -> i64 {
    leading_digits(id, 1) as i64
}

/// Country prefix of an ID (its first three digits)
pub fn country_of(id: u64) -> i64 {
    leading_digits(id, 3) as i64
}

/// True if the ID's region is selected
pub fn region_matches(id: u64, regions: &HashSet<i64>) -> bool {
    regions.contains(&region_of(id))
}

/// True if the ID's country prefix is explicitly included
pub fn country_include_matches(id: u64, countries: &HashSet<i64>) -> bool {
    countries.contains(&country_of(id))
}

/// True if the ID's country prefix is explicitly excluded
pub fn country_exclude_matches(id: u64, countries: &HashSet<i64>) -> bool {
    countries.contains(&-country_of(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(values: &[i64]) -> HashSet<i64> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_prefix_extraction() {
        assert_eq!(region_of(2420001), 2);
        assert_eq!(country_of(2420001), 242);
        assert_eq!(country_of(302123456), 302);
        assert_eq!(region_of(7), 7);
        assert_eq!(country_of(42), 42);
        assert_eq!(country_of(0), 0);
    }

    #[test]
    fn test_region_matches() {
        assert!(region_matches(302123456, &set(&[3])));
        assert!(!region_matches(302123456, &set(&[2, 4])));
        assert!(!region_matches(302123456, &set(&[])));
    }

    #[test]
    fn test_country_include_and_exclude() {
        let countries = set(&[242, -302]);
        assert!(country_include_matches(2420001, &countries));
        assert!(!country_exclude_matches(2420001, &countries));
        assert!(country_exclude_matches(302999999, &countries));
        assert!(!country_include_matches(302999999, &countries));
    }

    proptest! {
        #[test]
        fn prop_arithmetic_prefix_matches_decimal_text(id in 0u64..10_000_000_000) {
            let text = id.to_string();
            let first: i64 = text[..1].parse().unwrap();
            let first_three: i64 = text[..text.len().min(3)].parse().unwrap();
            prop_assert_eq!(region_of(id), first);
            prop_assert_eq!(country_of(id), first_three);
        }
    }
}
