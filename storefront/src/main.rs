use mystic_observability::LogConfig;
use mystic_storefront::App;

fn main() {
    console_error_panic_hook::set_once();

    let log_config = if cfg!(debug_assertions) {
        LogConfig::development()
    } else {
        LogConfig::production()
    };
    mystic_observability::init(&log_config);

    leptos::mount::mount_to_body(App);
}
