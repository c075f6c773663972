use foodgrid::{handle_event, initialize, Action, CategoryKey, Config, Event, FoodgridError, SortMode};

fn paged_state(page_size: usize) -> foodgrid::AppState {
    initialize(&Config {
        page_size,
        ..Config::default()
    })
}

#[test]
fn browsing_session() {
    let mut state = paged_state(4);

    // Popular ordering, second page.
    handle_event(&mut state, &Event::ToggleSortMode).unwrap();
    let (render, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(render);
    assert_eq!(actions, vec![Action::ScrollToTop]);

    let page = state.visible_page();
    let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["4", "5"]);

    // Favorite the cafe, then open its map link.
    handle_event(&mut state, &Event::CursorNext).unwrap();
    handle_event(&mut state, &Event::ToggleFavoriteSelected).unwrap();
    assert!(state.view.is_favorite("5"));

    let (render, actions) = handle_event(&mut state, &Event::NavigateSelected).unwrap();
    assert!(!render);
    assert_eq!(
        actions,
        vec![Action::OpenUrl {
            url: "https://maps.google.com/maps?q=BLUE%20CARIBOU%20CAFE".to_string()
        }]
    );

    // Switching category lands on page 1 with the cursor reset.
    handle_event(&mut state, &Event::SetCategory(CategoryKey::Cafe)).unwrap();
    assert_eq!(state.view.current_page(), 1);
    assert_eq!(state.cursor, 0);
    assert!(state.view.is_favorite("5"));
}

#[test]
fn sort_change_can_leave_a_stale_page() {
    let mut state = paged_state(1);
    handle_event(&mut state, &Event::SetCategory(CategoryKey::Snack)).unwrap();
    handle_event(&mut state, &Event::NextPage).unwrap();
    assert_eq!(state.view.current_page(), 2);

    handle_event(&mut state, &Event::SetSortMode(SortMode::Popular)).unwrap();
    assert_eq!(state.view.current_page(), 2);
    assert_eq!(state.visible_page().items.len(), 1);

    // A direct jump past the end is allowed and shows an empty state.
    handle_event(&mut state, &Event::SetPage(7)).unwrap();
    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.grid.cards.is_empty());
    assert!(vm.empty_state.is_some());
    assert_eq!(vm.pagination.current, 7);
    assert_eq!(vm.pagination.total_pages, 2);

    // Paging back from there returns to the last real page.
    handle_event(&mut state, &Event::PrevPage).unwrap();
    assert_eq!(state.view.current_page(), 2);
}

#[test]
fn next_page_on_last_page_is_a_noop() {
    let mut state = paged_state(8);
    let (render, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.view.current_page(), 1);
}

#[test]
fn navigate_by_id() {
    let mut state = paged_state(8);
    let (_, actions) = handle_event(&mut state, &Event::Navigate("3".to_string())).unwrap();
    assert_eq!(
        actions,
        vec![Action::OpenUrl {
            url: "https://maps.google.com/maps?q=%E5%BE%97%E5%8A%B2%E5%84%BF%E7%81%AB%E9%94%85".to_string()
        }]
    );

    let err = handle_event(&mut state, &Event::Navigate("99".to_string())).unwrap_err();
    assert!(matches!(err, FoodgridError::UnknownItem(ref id) if id == "99"));
}

#[test]
fn configured_maps_url_is_used() {
    let mut state = initialize(&Config {
        maps_url: "https://www.openstreetmap.org/search?query=".to_string(),
        default_category: CategoryKey::Hotpot,
        ..Config::default()
    });
    let (_, actions) = handle_event(&mut state, &Event::NavigateSelected).unwrap();
    assert_eq!(
        actions,
        vec![Action::OpenUrl {
            url: "https://www.openstreetmap.org/search?query=%E5%BE%97%E5%8A%B2%E5%84%BF%E7%81%AB%E9%94%85".to_string()
        }]
    );
}

#[test]
fn category_cycle_visits_every_category() {
    let mut state = paged_state(8);
    let mut seen = vec![state.view.selected_category()];
    for _ in 1..CategoryKey::ALL.len() {
        handle_event(&mut state, &Event::NextCategory).unwrap();
        seen.push(state.view.selected_category());
    }
    assert_eq!(seen, CategoryKey::ALL);

    handle_event(&mut state, &Event::NextCategory).unwrap();
    assert_eq!(state.view.selected_category(), CategoryKey::All);
}

#[test]
fn viewmodel_reflects_layout_width() {
    let state = paged_state(8);

    let narrow = state.compute_viewmodel(60, 40);
    let wide = state.compute_viewmodel(60, 160);

    assert_eq!(narrow.grid.columns, 1);
    assert_eq!(wide.grid.columns, 4);
    assert!(narrow.category_lines.len() > wide.category_lines.len());
    assert_eq!(wide.pagination.summary, "共 6 条");
    assert_eq!(wide.sort_options.iter().filter(|o| o.is_active).count(), 1);
}
