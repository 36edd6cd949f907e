//! Minimal Browser: a tabbed web browser shell.
//!
//! Entry point: opens the browser window with one tab at the home destination.
//! When built without the `gui` feature, runs a console demo over headless surfaces.

use minimal_browser::logging;
use minimal_browser::types::config::BrowserConfig;

#[cfg(feature = "gui")]
fn main() {
    logging::init();
    if let Err(e) = minimal_browser::ui::webview_app::run(BrowserConfig::default()) {
        tracing::error!(error = %e, "browser failed to start");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use minimal_browser::app::App;
    use minimal_browser::managers::tab_manager::TabManagerTrait;
    use minimal_browser::services::settings_dialog::SettingsDialogTrait;
    use minimal_browser::surface::headless::HeadlessSurfaceFactory;

    logging::init();

    let factory = HeadlessSurfaceFactory::new();
    let events = factory.queue();
    let mut app = App::new(BrowserConfig::default(), factory);
    app.startup();

    let pump = |app: &mut App<HeadlessSurfaceFactory>| {
        while let Some(event) = events.pop() {
            app.tab_manager.handle_surface_event(event);
        }
    };
    let show = |app: &App<HeadlessSurfaceFactory>, step: &str| {
        let tabs = &app.tab_manager;
        let strip: Vec<String> = tabs
            .tabs()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if i == tabs.active_index() {
                    format!("[{}]", t.label())
                } else {
                    t.label().to_string()
                }
            })
            .collect();
        println!("{:<28} {:<60} url = {}", step, strip.join(" | "), tabs.url_field());
    };

    println!();
    println!("  {} v{} (demo mode)", app.config.window_title, env!("CARGO_PKG_VERSION"));
    println!();

    pump(&mut app);
    show(&app, "start");

    app.tab_manager.navigate_to("example.com");
    pump(&mut app);
    show(&app, "navigate_to(example.com)");

    app.tab_manager.open_tab(None);
    pump(&mut app);
    show(&app, "open_tab()");

    app.tab_manager.navigate_to("https://www.rust-lang.org/learn");
    pump(&mut app);
    show(&app, "navigate_to(rust-lang)");

    app.tab_manager.go_back();
    pump(&mut app);
    show(&app, "go_back()");

    app.tab_manager.switch_active(Some(0));
    pump(&mut app);
    show(&app, "switch_active(0)");

    app.tab_manager.navigate_home();
    pump(&mut app);
    show(&app, "navigate_home()");

    app.tab_manager.close_tab(1);
    pump(&mut app);
    show(&app, "close_tab(1)");

    app.tab_manager.close_tab(0);
    pump(&mut app);
    show(&app, "close_tab(0) (last tab)");

    app.tab_manager.switch_active(None);
    pump(&mut app);
    show(&app, "switch_active(none)");

    let outcome = app.settings_dialog.confirm("https://example.org");
    println!();
    println!("  settings: {}", outcome.message().unwrap_or("(closed)"));

    app.shutdown();
}
