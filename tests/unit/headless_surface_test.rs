use minimal_browser::surface::headless::{HeadlessSurface, HeadlessSurfaceFactory, SurfaceEventQueue};
use minimal_browser::surface::{NavigableSurface, SurfaceEvent, SurfaceFactory};
use minimal_browser::types::tab::TabId;

fn surface_at(address: &str) -> (HeadlessSurface, SurfaceEventQueue, TabId) {
    let queue = SurfaceEventQueue::new();
    let tab = TabId::new();
    let surface = HeadlessSurface::new(tab, address, queue.clone());
    (surface, queue, tab)
}

#[test]
fn test_new_surface_announces_address_and_title() {
    let (surface, queue, tab) = surface_at("https://www.example.org/page");
    assert_eq!(surface.current_address(), "https://www.example.org/page");
    assert_eq!(surface.current_title(), "example.org");
    assert_eq!(
        queue.drain(),
        vec![
            SurfaceEvent::AddressChanged {
                tab,
                address: "https://www.example.org/page".into()
            },
            SurfaceEvent::TitleChanged {
                tab,
                title: "example.org".into()
            },
        ]
    );
    assert!(queue.is_empty());
}

#[test]
fn test_navigate_truncates_forward_history() {
    let (mut surface, _queue, _) = surface_at("https://a.example/");
    surface.navigate("https://b.example/");
    surface.navigate("https://c.example/");
    surface.go_back();
    surface.go_back();
    surface.navigate("https://d.example/");

    assert_eq!(surface.history(), ["https://a.example/", "https://d.example/"]);
    surface.go_forward();
    assert_eq!(surface.current_address(), "https://d.example/");
}

#[test]
fn test_back_at_start_and_forward_at_end_are_silent() {
    let (mut surface, queue, _) = surface_at("https://a.example/");
    queue.drain();

    surface.go_back();
    surface.go_forward();
    assert!(queue.is_empty());
    assert_eq!(surface.current_address(), "https://a.example/");
}

#[test]
fn test_history_moves_announce_new_address() {
    let (mut surface, queue, tab) = surface_at("https://a.example/");
    surface.navigate("https://b.example/");
    queue.drain();

    surface.go_back();
    assert_eq!(queue.len(), 2);
    assert_eq!(
        queue.pop(),
        Some(SurfaceEvent::AddressChanged {
            tab,
            address: "https://a.example/".into()
        })
    );
}

#[test]
fn test_reload_counts_without_events() {
    let (mut surface, queue, _) = surface_at("https://a.example/");
    queue.drain();
    surface.reload();
    assert_eq!(surface.reload_count(), 1);
    assert!(queue.is_empty());
}

#[test]
fn test_factory_surfaces_share_one_queue() {
    let mut factory = HeadlessSurfaceFactory::new();
    let queue = factory.queue();
    let first = TabId::new();
    let second = TabId::new();

    let _a = factory.create(first, "https://a.example/");
    let _b = factory.create(second, "https://b.example/");

    let tabs: Vec<TabId> = queue.drain().iter().map(|e| e.tab()).collect();
    assert_eq!(tabs, vec![first, first, second, second]);
}

#[test]
fn test_set_displayed_is_recorded() {
    let (mut surface, _queue, _) = surface_at("https://a.example/");
    assert!(!surface.is_displayed());
    surface.set_displayed(true);
    assert!(surface.is_displayed());
}
