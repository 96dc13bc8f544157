fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Tactus Desktop Example ===");
    println!("Touch or drag with the left mouse button to see recognized gestures.");
    println!("  - Tap the top bar to switch the pinch scale policy");
    println!("  - Long-press a box to select it");
    println!("  - Set RUST_LOG=debug to see engagement and swipe decisions");
    println!();

    tactus_desktop_demo::run()
}
