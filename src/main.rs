use fps_inventory::{run, window_conf};

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize logging (skip on Android - use logcat instead)
    #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
    env_logger::init();

    // Set panic hook for native builds
    #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        if let Some(location) = panic_info.location() {
            eprintln!("  at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    run().await;
}
