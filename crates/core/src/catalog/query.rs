use crate::models::GameRecord;
use crate::view::CATEGORY_ALL;

/// Number of records shown in the highlights strip by default.
pub const DEFAULT_HIGHLIGHT_COUNT: usize = 5;

/// Filter records by a free-text term and a category tag.
///
/// The term matches case-insensitively as a substring of name or
/// description; an empty term matches everything. A category other than
/// `"all"` matches when the lowercased tag appears inside the record's
/// description — there is no dedicated category field, so the tag is
/// matched against the free text. Both predicates are ANDed and catalog
/// order is preserved.
pub fn filter(records: &[GameRecord], term: &str, category: &str) -> Vec<GameRecord> {
    let needle = term.trim().to_lowercase();
    let tag = category.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            let name = record.name.to_lowercase();
            let description = record.description.to_lowercase();
            let matches_term =
                needle.is_empty() || name.contains(&needle) || description.contains(&needle);
            let matches_category = tag == CATEGORY_ALL || description.contains(&tag);
            matches_term && matches_category
        })
        .cloned()
        .collect()
}

/// Select the most recent releases for the highlights strip.
///
/// Sorts a copy by year descending and takes the first `count`; the
/// standard sort is stable, so records sharing a year keep their catalog
/// order. The source slice is never mutated.
pub fn highlights(records: &[GameRecord], count: usize) -> Vec<GameRecord> {
    let mut recent = records.to_vec();
    recent.sort_by(|a, b| b.year.cmp(&a.year));
    recent.truncate(count);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, year: i32, description: &str) -> GameRecord {
        GameRecord {
            name: name.to_string(),
            year,
            description: description.to_string(),
            link: format!("https://example.com/{}", name.to_lowercase().replace(' ', "-")),
            slug: None,
        }
    }

    fn sample_catalog() -> Vec<GameRecord> {
        vec![
            record("RPG Quest", 2020, "A sweeping rpg epic across kingdoms."),
            record("Old Game", 2010, "A classic platformer from another era."),
            record("New Hit", 2024, "Fresh action hit with rpg elements."),
        ]
    }

    #[test]
    fn empty_term_and_all_category_returns_catalog_unchanged() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "", CATEGORY_ALL);
        assert_eq!(result, catalog);
    }

    #[test]
    fn term_matches_name_or_description_case_insensitively() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "OLD", CATEGORY_ALL);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Old Game");

        let by_description = filter(&catalog, "kingdoms", CATEGORY_ALL);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "RPG Quest");
    }

    #[test]
    fn category_matches_against_description_text() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "", "rpg");
        assert_eq!(
            result.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            ["RPG Quest", "New Hit"]
        );

        let platformers = filter(&catalog, "", "Platformer");
        assert_eq!(platformers.len(), 1);
        assert_eq!(platformers[0].name, "Old Game");
    }

    #[test]
    fn term_and_category_are_anded() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "fresh", "rpg");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "New Hit");

        assert!(filter(&catalog, "classic", "rpg").is_empty());
    }

    #[test]
    fn every_result_satisfies_both_predicates() {
        let catalog = sample_catalog();
        let term = "a";
        let category = "rpg";
        let result = filter(&catalog, term, category);
        for record in &result {
            let haystack =
                format!("{} {}", record.name.to_lowercase(), record.description.to_lowercase());
            assert!(haystack.contains(term));
            assert!(record.description.to_lowercase().contains(category));
        }
        for record in catalog.iter().filter(|r| !result.contains(r)) {
            let name = record.name.to_lowercase();
            let description = record.description.to_lowercase();
            let matches_term = name.contains(term) || description.contains(term);
            let matches_category = description.contains(category);
            assert!(!(matches_term && matches_category));
        }
    }

    #[test]
    fn highlights_sorts_by_year_descending() {
        let catalog = sample_catalog();
        let result = highlights(&catalog, DEFAULT_HIGHLIGHT_COUNT);
        assert_eq!(
            result.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            ["New Hit", "RPG Quest", "Old Game"]
        );
        // Source order untouched.
        assert_eq!(catalog[0].name, "RPG Quest");
    }

    #[test]
    fn highlights_truncates_to_count() {
        let catalog = sample_catalog();
        let result = highlights(&catalog, 2);
        assert_eq!(
            result.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            ["New Hit", "RPG Quest"]
        );
    }

    #[test]
    fn highlights_ties_keep_catalog_order() {
        let catalog = vec![
            record("First", 2020, "one"),
            record("Second", 2020, "two"),
            record("Third", 2021, "three"),
            record("Fourth", 2020, "four"),
        ];
        let result = highlights(&catalog, 10);
        assert_eq!(
            result.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            ["Third", "First", "Second", "Fourth"]
        );
    }

    #[test]
    fn highlights_of_empty_catalog_is_empty() {
        assert!(highlights(&[], DEFAULT_HIGHLIGHT_COUNT).is_empty());
    }
}
