//! Property-based tests for URL field synchronization.
//!
//! Once pending surface notifications are delivered, the URL field shows the
//! active tab's address unless the user has typed into it since the last
//! re-derivation. Navigations in background tabs never leak into the field.

use minimal_browser::managers::tab_manager::{TabManager, TabManagerTrait};
use minimal_browser::surface::headless::{HeadlessSurfaceFactory, SurfaceEventQueue};
use minimal_browser::surface::NavigableSurface;
use minimal_browser::types::config::BrowserConfig;
use proptest::prelude::*;

type Manager = TabManager<HeadlessSurfaceFactory>;

#[derive(Debug, Clone)]
enum Op {
    Open,
    Close(usize),
    Switch(usize),
    Submit(String),
    Home,
    Back,
    Forward,
    Reload,
    Edit(String),
    /// A page in the tab at this index navigates on its own.
    PageNavigates(usize, String),
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let host = "[a-z]{1,6}\\.(org|net)";
    prop::collection::vec(
        prop_oneof![
            2 => Just(Op::Open),
            1 => (0..8usize).prop_map(Op::Close),
            2 => (0..8usize).prop_map(Op::Switch),
            3 => host.prop_map(Op::Submit),
            1 => Just(Op::Home),
            2 => Just(Op::Back),
            1 => Just(Op::Forward),
            1 => Just(Op::Reload),
            2 => "[a-z:/.]{0,10}".prop_map(Op::Edit),
            3 => ((0..8usize), host).prop_map(|(i, h)| Op::PageNavigates(i, format!("https://{}/", h))),
        ],
        1..80,
    )
}

fn pump(manager: &mut Manager, queue: &SurfaceEventQueue) {
    while let Some(event) = queue.pop() {
        manager.handle_surface_event(event);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn url_field_tracks_active_tab(ops in arb_ops()) {
        let factory = HeadlessSurfaceFactory::new();
        let queue = factory.queue();
        let mut manager = TabManager::new(factory, &BrowserConfig::default());

        for op in &ops {
            match op {
                Op::Open => {
                    manager.open_tab(None);
                }
                Op::Close(i) => {
                    manager.close_tab(i % manager.tab_count());
                }
                Op::Switch(i) => manager.switch_active(Some(i % manager.tab_count())),
                Op::Submit(text) => {
                    manager.navigate_to(text);
                }
                Op::Home => manager.navigate_home(),
                Op::Back => manager.go_back(),
                Op::Forward => manager.go_forward(),
                Op::Reload => manager.reload(),
                Op::Edit(text) => manager.edit_url_field(text),
                Op::PageNavigates(i, address) => {
                    let id = manager.tab(i % manager.tab_count()).unwrap().id();
                    manager.surface_mut(id).unwrap().navigate(address);
                }
            }
            pump(&mut manager, &queue);

            let active_address = manager.active_tab().surface().current_address();
            if manager.is_url_field_edited() {
                prop_assert!(matches!(op, Op::Edit(_) | Op::Close(_) | Op::Back | Op::Forward | Op::Reload | Op::PageNavigates(..)));
            } else {
                prop_assert_eq!(manager.url_field(), active_address.as_str(), "after {:?}", op);
            }
        }
    }

    #[test]
    fn submitted_text_gets_http_prefix_unless_present(text in "[a-z0-9:/.]{0,20}") {
        let mut manager = TabManager::new(HeadlessSurfaceFactory::new(), &BrowserConfig::default());
        let address = manager.navigate_to(&text);
        if text.starts_with("http") {
            prop_assert_eq!(&address, &text);
        } else {
            prop_assert_eq!(address.clone(), format!("http://{}", text));
        }
        prop_assert_eq!(manager.active_tab().surface().current_address(), address);
    }
}
