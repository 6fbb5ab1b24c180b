#[cfg(target_arch = "wasm32")]
fn main() {
    attendance_console::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("attendance-console runs in the browser; build it with `trunk build`");
}
