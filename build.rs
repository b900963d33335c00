/// Casement build script.
///
/// The Win32 surface (`platform::win32`) only exists on Windows targets.
/// The rest of the crate — the error and config modules — is portable, so a
/// non-Windows build is allowed through with a warning rather than rejected.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=casement: target OS is {target_os:?}; \
             the Win32 window surface is compiled out"
        );
    }

    // Only re-run the build script when it changes.
    println!("cargo:rerun-if-changed=build.rs");
}
