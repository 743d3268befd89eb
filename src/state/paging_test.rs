use super::*;

#[test]
fn twelve_items_make_two_pages_of_ten() {
    let items: Vec<usize> = (0..12).collect();
    let pager = Pager::default();

    assert_eq!(pager.total_pages(items.len()), 2);
    assert_eq!(pager.slice(&items), (0..10).collect::<Vec<_>>());
    assert!(!pager.has_prev());
    assert!(pager.has_next(items.len()));

    let page2 = pager.next(items.len());
    assert_eq!(page2.current_page, 2);
    assert_eq!(page2.slice(&items), &[10, 11]);
    assert!(page2.has_prev());
    assert!(!page2.has_next(items.len()));
}

#[test]
fn empty_list_still_has_one_page() {
    let items: Vec<usize> = Vec::new();
    let pager = Pager::default();

    assert_eq!(pager.total_pages(0), 1);
    assert!(pager.slice(&items).is_empty());
    assert!(!pager.has_prev());
    assert!(!pager.has_next(0));
}

#[test]
fn prev_is_a_noop_at_page_one() {
    let pager = Pager::default();
    assert_eq!(pager.prev(), pager);
}

#[test]
fn next_is_a_noop_at_the_last_page() {
    let pager = Pager { current_page: 2, page_size: 10 };
    assert_eq!(pager.next(12), pager);
}

#[test]
fn exact_multiple_has_no_partial_page() {
    let pager = Pager::default();
    assert_eq!(pager.total_pages(20), 2);

    let last = pager.next(20);
    assert_eq!(last.current_page, 2);
    assert!(!last.has_next(20));
}

#[test]
fn custom_page_size_slices_accordingly() {
    let items: Vec<usize> = (0..7).collect();
    let pager = Pager::new(3);

    assert_eq!(pager.total_pages(items.len()), 3);
    let page3 = pager.next(items.len()).next(items.len());
    assert_eq!(page3.slice(&items), &[6]);
}
