use fltk::app;

use teleprompter::app::infrastructure::logging::init_logging;
use teleprompter::app::state::AppState;
use teleprompter::app::{JsonFileStore, Message, StoreIdentity};
use teleprompter::ui::main_window::build_main_window;

fn main() {
    init_logging();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let store = JsonFileStore::open(&StoreIdentity::default());
    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, sender, store);

    let settings = state.controller.settings();
    log::info!(
        "Starting with font size {}, speed {}, dark theme {}",
        settings.font_size,
        settings.speed,
        settings.dark_theme
    );
    state.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.dispatch(msg) {
                break;
            }
        }
    }
}
