use minimal_browser::app::App;
use minimal_browser::managers::tab_manager::TabManagerTrait;
use minimal_browser::surface::headless::HeadlessSurfaceFactory;
use minimal_browser::types::config::{BrowserConfig, DEFAULT_DESTINATION};

#[test]
fn test_app_starts_with_one_tab_at_home() {
    let mut app = App::new(BrowserConfig::default(), HeadlessSurfaceFactory::new());
    app.startup();
    assert_eq!(app.tab_manager.tab_count(), 1);
    assert_eq!(app.tab_manager.active_index(), 0);
    assert_eq!(app.tab_manager.url_field(), DEFAULT_DESTINATION);
    app.shutdown();
}

#[test]
fn test_app_keeps_its_config() {
    let config = BrowserConfig {
        window_title: "Shell".to_string(),
        ..BrowserConfig::default()
    };
    let app = App::new(config.clone(), HeadlessSurfaceFactory::new());
    assert_eq!(app.config, config);
}

#[test]
fn test_open_tab_then_close_returns_to_first() {
    let factory = HeadlessSurfaceFactory::new();
    let queue = factory.queue();
    let mut app = App::new(BrowserConfig::default(), factory);

    app.tab_manager.navigate_to("example.com");
    app.tab_manager.open_tab(None);
    app.tab_manager.close_tab(1);
    while let Some(event) = queue.pop() {
        app.tab_manager.handle_surface_event(event);
    }

    assert_eq!(app.tab_manager.tab_count(), 1);
    assert_eq!(app.tab_manager.url_field(), "http://example.com");
    assert_eq!(app.tab_manager.active_tab().label(), "example.com");
}
