mod app;

fn main() {
    // RUST_LOG=atrium=debug for sidebar state transitions.
    env_logger::init();
    app::app_main();
}
