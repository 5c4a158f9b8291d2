use vitrina::pagination::{DEFAULT_ITEMS_PER_PAGE, PageItem, Paginated, page_items};

fn collection(len: usize) -> Vec<usize> {
    (0..len).collect()
}

#[test]
fn total_pages_is_the_ceiling_of_count_over_page_size() {
    for (count, expected) in [(0, 1), (1, 1), (8, 1), (9, 2), (16, 2), (17, 3), (100, 13)] {
        let paginated = Paginated::new(collection(count), 1, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(
            paginated.total_pages, expected,
            "count {count} should produce {expected} pages"
        );
    }
}

#[test]
fn page_one_always_shows_the_first_eight_items() {
    let paginated = Paginated::new(collection(30), 1, DEFAULT_ITEMS_PER_PAGE);
    assert_eq!(paginated.items, (0..8).collect::<Vec<_>>());
}

#[test]
fn the_last_page_shows_the_remainder() {
    let paginated = Paginated::new(collection(30), 4, DEFAULT_ITEMS_PER_PAGE);
    assert_eq!(paginated.items, vec![24, 25, 26, 27, 28, 29]);
    assert!(!paginated.has_next);
}

#[test]
fn navigating_away_and_back_reproduces_the_first_page() {
    let first = Paginated::new(collection(30), 1, DEFAULT_ITEMS_PER_PAGE);
    let _elsewhere = Paginated::new(collection(30), 3, DEFAULT_ITEMS_PER_PAGE);
    let back = Paginated::new(collection(30), 1, DEFAULT_ITEMS_PER_PAGE);

    assert_eq!(first, back);
}

#[test]
fn previous_is_disabled_on_the_first_page_and_next_on_the_last() {
    let first = Paginated::new(collection(30), 1, DEFAULT_ITEMS_PER_PAGE);
    assert!(!first.has_prev);
    assert!(first.has_next);

    let last = Paginated::new(collection(30), 4, DEFAULT_ITEMS_PER_PAGE);
    assert!(last.has_prev);
    assert!(!last.has_next);
}

#[test]
fn requesting_a_page_past_the_end_clamps_to_the_last_page() {
    let paginated = Paginated::new(collection(30), 40, DEFAULT_ITEMS_PER_PAGE);
    assert_eq!(paginated.page, 4);
    assert_eq!(paginated.items, vec![24, 25, 26, 27, 28, 29]);
}

#[test]
fn controls_show_first_last_current_and_neighbors_with_single_gaps() {
    let items = page_items(5, 10);

    let numbers: Vec<Option<usize>> = items
        .iter()
        .map(|item| match item {
            PageItem::Page { number, .. } => Some(*number),
            PageItem::Gap => None,
        })
        .collect();

    assert_eq!(
        numbers,
        vec![
            Some(1),
            None,
            Some(4),
            Some(5),
            Some(6),
            None,
            Some(10)
        ]
    );
    assert!(matches!(
        items[3],
        PageItem::Page {
            number: 5,
            current: true
        }
    ));
}
