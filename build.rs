fn main() {
    // Stamp the build timestamp so the facade can report it next to the
    // crate version.
    let build_date = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    println!("cargo:rustc-env=BUILD_DATE={build_date}");
}
