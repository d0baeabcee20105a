use folio_kernel::domain::config::NavigationConfig;
use folio_kernel::domain::{Anchor, NAV_ITEMS};
use folio_kernel::motion::testing::FakeViewport;
use folio_kernel::motion::{NavigationController, ScrollBehavior, select_active};
use proptest::prelude::*;

fn page(tops: [f64; 6]) -> FakeViewport {
    Anchor::ALL.iter().zip(tops).fold(FakeViewport::new(), |vp, (anchor, top)| vp.with_anchor(anchor.id(), top))
}

fn controller(viewport: &FakeViewport) -> NavigationController<FakeViewport> {
    NavigationController::new(
        viewport.clone(),
        NAV_ITEMS.iter().map(|item| item.anchor.id()),
        NavigationConfig::default(),
    )
}

#[test]
fn walks_the_whole_page() {
    let viewport = page([0.0, 900.0, 1800.0, 3000.0, 4200.0, 5100.0]);
    let mut nav = controller(&viewport);
    assert_eq!(nav.active(), Some("home"));

    let expected = [
        (0.0, "home"),
        (799.0, "home"),
        (800.0, "about"),
        (2950.0, "projects"),
        (4150.0, "skills"),
        (9000.0, "contact"),
        (10.0, "home"),
    ];
    for (scroll, anchor) in expected {
        viewport.set_scroll(scroll);
        nav.on_scroll();
        assert_eq!(nav.active(), Some(anchor), "scroll offset {scroll}");
    }
}

#[test]
fn navigate_to_every_anchor_clears_the_header() {
    let tops = [0.0, 900.0, 1800.0, 3000.0, 4200.0, 5100.0];
    let viewport = page(tops);
    let mut nav = controller(&viewport);

    for (anchor, top) in Anchor::ALL.iter().zip(tops) {
        assert_eq!(nav.navigate_to(anchor.id()), Some(top - 80.0));
    }
    let requests = viewport.scroll_requests();
    assert_eq!(requests.len(), 6);
    assert!(requests.iter().all(|(_, behavior)| *behavior == ScrollBehavior::Smooth));
}

#[test]
fn unavailable_environment_is_inert() {
    let viewport = FakeViewport::unavailable().with_anchor("about", 900.0);
    let mut nav = controller(&viewport);

    assert!(!nav.on_scroll());
    assert_eq!(nav.navigate_to("about"), None);
    assert_eq!(nav.active(), Some("home"));
}

proptest! {
    #[test]
    fn selection_is_last_section_at_or_above(
        mut tops in proptest::collection::vec(0.0f64..20_000.0, 1..8),
        scroll in 0.0f64..25_000.0,
    ) {
        tops.sort_by(f64::total_cmp);
        let effective = scroll + 100.0;
        let present: Vec<Option<f64>> = tops.iter().copied().map(Some).collect();

        match select_active(&present, effective) {
            Some(i) => {
                prop_assert!(tops[i] <= effective);
                prop_assert!(tops[i + 1..].iter().all(|top| *top > effective));
            },
            None => prop_assert!(tops.iter().all(|top| *top > effective)),
        }
    }

    #[test]
    fn navigate_target_is_top_minus_clearance(top in 0.0f64..50_000.0) {
        let viewport = FakeViewport::new().with_anchor("skills", top);
        let mut nav = NavigationController::new(viewport, ["skills"], NavigationConfig::default());
        prop_assert_eq!(nav.navigate_to("skills"), Some(top - 80.0));
    }
}
