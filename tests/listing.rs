use foodgrid::app::listing::{derive_visible_items, DEFAULT_PAGE_SIZE};
use foodgrid::{Catalog, CategoryKey, SortMode, ViewState};
use std::collections::HashSet;

fn ids(view: &ViewState, page_size: usize) -> Vec<String> {
    derive_visible_items(Catalog::builtin(), view, page_size)
        .items
        .iter()
        .map(|item| item.id.clone())
        .collect()
}

#[test]
fn every_category_only_yields_its_own_items() {
    let catalog = Catalog::builtin();
    for key in CategoryKey::ALL {
        let view = ViewState::new(key, SortMode::Recommended);
        let page = derive_visible_items(catalog, &view, DEFAULT_PAGE_SIZE);

        if key == CategoryKey::All {
            assert_eq!(page.items.len(), catalog.items().len());
        } else {
            assert!(page.items.iter().all(|item| item.category == key), "{key}");
        }
    }
}

#[test]
fn hotpot_has_exactly_one_item() {
    let view = ViewState::new(CategoryKey::Hotpot, SortMode::Recommended);
    assert_eq!(ids(&view, DEFAULT_PAGE_SIZE), ["3"]);
}

#[test]
fn empty_category_yields_empty_page() {
    for key in [CategoryKey::Seafood, CategoryKey::Japanese, CategoryKey::Bar] {
        let view = ViewState::new(key, SortMode::Popular);
        let page = derive_visible_items(Catalog::builtin(), &view, DEFAULT_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages(), 1);
        assert!(!page.is_stale());
    }
}

#[test]
fn recommended_is_non_increasing_in_rating() {
    let view = ViewState::default();
    let page = derive_visible_items(Catalog::builtin(), &view, DEFAULT_PAGE_SIZE);
    assert!(page.items.windows(2).all(|w| w[0].rating >= w[1].rating));
    assert_eq!(ids(&view, DEFAULT_PAGE_SIZE), ["2", "5", "3", "1", "6", "4"]);
}

#[test]
fn popular_orders_by_review_count() {
    let view = ViewState::new(CategoryKey::All, SortMode::Popular);
    let page = derive_visible_items(Catalog::builtin(), &view, DEFAULT_PAGE_SIZE);

    assert!(page.items.windows(2).all(|w| w[0].reviews >= w[1].reviews));
    assert_eq!(page.items[0].id, "3");
    assert_eq!(page.items[0].reviews, 3156);
    assert_eq!(ids(&view, DEFAULT_PAGE_SIZE), ["3", "1", "2", "6", "4", "5"]);
}

#[test]
fn unrecognised_sort_token_orders_by_rating() {
    let view = ViewState::new(CategoryKey::All, SortMode::from_key_lossy("cheapest"));
    assert_eq!(view.sort_mode(), SortMode::Recommended);
    assert_eq!(ids(&view, DEFAULT_PAGE_SIZE)[0], "2");
}

#[test]
fn pages_are_bounded_and_disjoint() {
    let page_size = 4;
    let mut view = ViewState::new(CategoryKey::All, SortMode::Popular);

    let first = ids(&view, page_size);
    view.set_page(2);
    let second = ids(&view, page_size);
    view.set_page(3);
    let third = ids(&view, page_size);

    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 2);
    assert!(third.is_empty());

    let a: HashSet<_> = first.iter().collect();
    let b: HashSet<_> = second.iter().collect();
    assert!(a.is_disjoint(&b));
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let mut view = ViewState::default();
    view.set_page(99);
    let page = derive_visible_items(Catalog::builtin(), &view, DEFAULT_PAGE_SIZE);
    assert!(page.items.is_empty());
    assert!(page.is_stale());
    assert_eq!(page.total_matches, 6);
}

#[test]
fn category_change_resets_page() {
    let mut view = ViewState::default();
    view.set_page(3);
    view.set_category(CategoryKey::Hotpot);
    assert_eq!(view.current_page(), 1);
}

#[test]
fn sort_change_keeps_page() {
    let mut view = ViewState::default();
    view.set_page(2);
    view.set_sort_mode(SortMode::Popular);
    assert_eq!(view.current_page(), 2);
}

#[test]
fn favorites_toggle_independently() {
    let mut view = ViewState::default();
    view.toggle_favorite("1");
    view.toggle_favorite("2");
    view.toggle_favorite("1");

    let expected: HashSet<String> = ["2".to_string()].into_iter().collect();
    assert_eq!(view.favorite_ids(), &expected);
}

#[test]
fn double_toggle_is_identity() {
    let mut view = ViewState::default();
    view.toggle_favorite("4");
    let before = view.clone();

    view.toggle_favorite("does-not-exist");
    view.toggle_favorite("does-not-exist");
    assert_eq!(view, before);
}
