//! Compute the visible subset of an event listing.
//!
//! Pure functions over a fetched collection: no shared state, no I/O.
//! The caller owns the search term and the selected categories and passes
//! them in; same inputs always produce the same subsequence in the same
//! relative order.

use crate::event::Event;

/// Filter a listing down to the events matching both the free-text search
/// term and the selected-category set.
///
/// An event is visible when it matches the search (term empty, or the
/// lowercased term appears in the lowercased title, description, location,
/// or any category) AND matches the category filter (selection empty, or
/// at least one of the event's categories is in the selection).
pub fn visible_events<'a>(
    events: &'a [Event],
    search_term: &str,
    selected_categories: &[String],
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            matches_search(event, search_term) && matches_categories(event, selected_categories)
        })
        .collect()
}

/// Case-insensitive substring match across title, description, location
/// and categories. An empty term matches everything.
pub fn matches_search(event: &Event, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();

    event.title.to_lowercase().contains(&term)
        || event.description.to_lowercase().contains(&term)
        || event.location.to_lowercase().contains(&term)
        || event
            .categories
            .iter()
            .any(|category| category.to_lowercase().contains(&term))
}

/// Category intersection match. An empty selection matches everything;
/// otherwise the event needs at least one exact tag in common with the
/// selection, so events without categories never match.
pub fn matches_categories(event: &Event, selected: &[String]) -> bool {
    selected.is_empty()
        || event
            .categories
            .iter()
            .any(|category| selected.contains(category))
}

/// Collect the unique categories across a listing, in first-appearance
/// order. This is what a category picker offers as choices.
pub fn all_categories(events: &[Event]) -> Vec<String> {
    let mut seen = Vec::new();

    for event in events {
        for category in &event.categories {
            if !seen.contains(category) {
                seen.push(category.clone());
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_event(title: &str, description: &str, location: &str, categories: &[&str]) -> Event {
        Event {
            id: format!("id-{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            description: description.to_string(),
            image: None,
            start_time: Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 1, 1, 20, 0, 0).unwrap(),
            location: location.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            organizer: "Test Organizer".to_string(),
            organizer_image: None,
        }
    }

    fn sample_events() -> Vec<Event> {
        vec![
            make_event("Jazz Night", "An evening of live jazz", "Blue Note", &["Music", "Arts"]),
            make_event("Tech Meetup", "Talks about Rust", "Hub 42", &["Technology"]),
            make_event("Food Festival", "Street food from everywhere", "Main Square", &["Food"]),
            make_event("Open Mic", "Bring your jazz standards", "Cafe Ella", &[]),
        ]
    }

    fn titles(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    // --- search ---

    #[test]
    fn empty_term_is_identity() {
        let events = sample_events();
        let visible = visible_events(&events, "", &[]);
        assert_eq!(visible.len(), events.len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let events = sample_events();
        let visible = visible_events(&events, "JAZZ", &[]);
        assert_eq!(titles(&visible), vec!["Jazz Night", "Open Mic"]);
    }

    #[test]
    fn search_matches_description_and_location() {
        let events = sample_events();
        assert_eq!(titles(&visible_events(&events, "rust", &[])), vec!["Tech Meetup"]);
        assert_eq!(titles(&visible_events(&events, "square", &[])), vec!["Food Festival"]);
    }

    #[test]
    fn search_matches_category_substring() {
        let events = sample_events();
        // "tech" appears in the "Technology" tag, not in the title fields
        let visible = visible_events(&events, "nolog", &[]);
        assert_eq!(titles(&visible), vec!["Tech Meetup"]);
    }

    #[test]
    fn search_with_no_match_is_empty() {
        let events = sample_events();
        assert!(visible_events(&events, "opera", &[]).is_empty());
    }

    // --- categories ---

    #[test]
    fn empty_selection_is_identity() {
        let events = sample_events();
        let visible = visible_events(&events, "", &[]);
        assert_eq!(visible.len(), events.len());
    }

    #[test]
    fn selection_requires_intersection() {
        let events = sample_events();
        let selected = vec!["Music".to_string(), "Food".to_string()];
        let visible = visible_events(&events, "", &selected);
        assert_eq!(titles(&visible), vec!["Jazz Night", "Food Festival"]);
    }

    #[test]
    fn selection_is_exact_not_substring() {
        let events = sample_events();
        let selected = vec!["Tech".to_string()];
        assert!(visible_events(&events, "", &selected).is_empty());
    }

    #[test]
    fn uncategorized_never_matches_selection() {
        let events = sample_events();
        let selected = vec!["Music".to_string()];
        let visible = visible_events(&events, "", &selected);
        assert!(!titles(&visible).contains(&"Open Mic".to_string()));

        // but it still matches by text
        let visible = visible_events(&events, "standards", &[]);
        assert_eq!(titles(&visible), vec!["Open Mic"]);
    }

    // --- conjunction ---

    #[test]
    fn search_and_selection_are_conjunctive() {
        let events = sample_events();
        let selected = vec!["Music".to_string()];

        let both = visible_events(&events, "jazz", &selected);
        assert_eq!(titles(&both), vec!["Jazz Night"]);

        // equals the intersection of the two independent filters
        let by_search = visible_events(&events, "jazz", &[]);
        let by_category = visible_events(&events, "", &selected);
        let intersection: Vec<String> = titles(&by_search)
            .into_iter()
            .filter(|t| titles(&by_category).contains(t))
            .collect();
        assert_eq!(titles(&both), intersection);
    }

    #[test]
    fn filtering_preserves_input_order() {
        let events = sample_events();
        let visible = visible_events(&events, "", &[]);
        let order: Vec<String> = titles(&visible);
        let expected: Vec<String> = events.iter().map(|e| e.title.clone()).collect();
        assert_eq!(order, expected);
    }

    // --- all_categories ---

    #[test]
    fn all_categories_dedupes_in_first_seen_order() {
        let mut events = sample_events();
        events.push(make_event("Second Jazz", "More jazz", "Blue Note", &["Arts", "Music"]));

        assert_eq!(
            all_categories(&events),
            vec!["Music", "Arts", "Technology", "Food"]
        );
    }

    #[test]
    fn all_categories_empty_listing() {
        assert!(all_categories(&[]).is_empty());
    }
}
