use dioxus::logger::tracing::Level;

fn main() {
    #[cfg(debug_assertions)]
    let level = Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let level = Level::INFO;
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {err}");
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};

        dioxus::LaunchBuilder::new()
            .with_cfg(
                Config::default().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_maximized(true)
                        .with_title("ZYNK"),
                ),
            )
            .launch(ui::App);
    }
    #[cfg(not(feature = "desktop"))]
    dioxus::launch(ui::App);
}
