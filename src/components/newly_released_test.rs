use super::*;

#[test]
fn idless_items_with_different_titles_keep_distinct_keys() {
    let first = NewlyReleasedMovie {
        title: Some("Untracked Premiere".to_owned()),
        ..NewlyReleasedMovie::default()
    };
    let second = NewlyReleasedMovie {
        title: Some("Festival Cut".to_owned()),
        ..NewlyReleasedMovie::default()
    };
    assert!(first.id.is_none() && second.id.is_none());
    assert_ne!(release_key(&first), release_key(&second));
}

#[test]
fn id_alone_distinguishes_same_titled_items() {
    let original = NewlyReleasedMovie {
        id: Some(1),
        title: Some("Remake".to_owned()),
        ..NewlyReleasedMovie::default()
    };
    let remake = NewlyReleasedMovie { id: Some(2), ..original.clone() };
    assert_ne!(release_key(&original), release_key(&remake));
}
