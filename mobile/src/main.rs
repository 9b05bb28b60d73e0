use dioxus::logger::tracing::Level;

fn main() {
    #[cfg(debug_assertions)]
    {
        if let Err(err) = dioxus::logger::init(Level::DEBUG) {
            eprintln!("Failed to initialize logger: {err}");
        }
    }
    #[cfg(not(debug_assertions))]
    {
        if let Err(err) = dioxus::logger::init(Level::INFO) {
            eprintln!("Failed to initialize logger: {err}");
        }
    }

    dioxus::launch(ui::App);
}
