mod app;
mod components;
mod context;
mod error;
mod helpers;

fn main() {
    if let Err(err) = app::start() {
        gloo_console::error!(format!("Control panel setup failed: {err}"));
    }
}
