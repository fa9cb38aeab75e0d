//! Filter builder: raw user inputs to a structured `FilterSpec`.

use hireboard_types::filter::{FilterSpec, PriceBucket};

/// Translates the search box text and the price selector into a
/// `FilterSpec`.
///
/// Pure and deterministic. Surrounding whitespace in the text query is
/// ignored, and a blank query adds no text predicate. The availability
/// exclusion is always present.
pub struct FilterBuilder;

impl FilterBuilder {
    pub fn build(text_query: &str, price_bucket: Option<PriceBucket>) -> FilterSpec {
        let text = text_query.trim();
        let text = (!text.is_empty()).then(|| text.to_string());
        FilterSpec::new(text, price_bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireboard_types::filter::Predicate;
    use hireboard_types::provider::AvailabilityStatus;

    fn exclusion() -> Predicate {
        Predicate::StatusNotIn(vec![AvailabilityStatus::Busy, AvailabilityStatus::Offline])
    }

    #[test]
    fn test_no_inputs_only_excludes_unlisted() {
        let spec = FilterBuilder::build("", None);

        assert_eq!(spec.text_query(), None);
        assert_eq!(spec.price_bucket(), None);
        assert_eq!(spec.predicate(), Predicate::And(vec![exclusion()]));
    }

    #[test]
    fn test_text_and_medium_bucket() {
        let spec = FilterBuilder::build("react", Some(PriceBucket::Medium));

        assert_eq!(
            spec.predicate(),
            Predicate::And(vec![
                Predicate::Or(vec![
                    Predicate::NameContains("react".to_string()),
                    Predicate::SkillsContain("react".to_string()),
                ]),
                Predicate::RateAtLeast(0.3),
                Predicate::RateBelow(0.6),
                exclusion(),
            ])
        );
    }

    #[test]
    fn test_low_and_high_buckets() {
        let low = FilterBuilder::build("", Some(PriceBucket::Low)).predicate();
        assert_eq!(
            low,
            Predicate::And(vec![Predicate::RateBelow(0.3), exclusion()])
        );

        let high = FilterBuilder::build("", Some(PriceBucket::High)).predicate();
        assert_eq!(
            high,
            Predicate::And(vec![Predicate::RateAtLeast(0.6), exclusion()])
        );
    }

    #[test]
    fn test_whitespace_query_is_blank() {
        assert_eq!(FilterBuilder::build("   ", None), FilterBuilder::build("", None));
        assert_eq!(
            FilterBuilder::build("  rust ", None).text_query(),
            Some("rust")
        );
    }

    #[test]
    fn test_exclusion_present_for_every_input_combination() {
        let buckets = [None, Some(PriceBucket::Low), Some(PriceBucket::Medium), Some(PriceBucket::High)];
        for text in ["", "ada", "%_"] {
            for bucket in buckets {
                let spec = FilterBuilder::build(text, bucket);
                let Predicate::And(all) = spec.predicate() else {
                    panic!("top-level predicate must be a conjunction");
                };
                assert_eq!(all.last(), Some(&exclusion()), "text={text:?} bucket={bucket:?}");
                assert_eq!(
                    spec.excluded_statuses(),
                    &[AvailabilityStatus::Busy, AvailabilityStatus::Offline]
                );
            }
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = FilterBuilder::build("react", Some(PriceBucket::High));
        let b = FilterBuilder::build("react", Some(PriceBucket::High));
        assert_eq!(a, b);
        assert_ne!(a, FilterBuilder::build("react", Some(PriceBucket::Low)));
    }
}
