//! Launching the system browser

use std::process::{Command, Stdio};

use log::debug;

/// Open `url` with the platform opener. Returns false if it could not be started.
pub fn open_browser(url: &str) -> bool {
    let (program, args) = opener();
    debug!("Opening {} with {}", url, program);
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .is_ok()
}

fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("rundll32", &["url.dll,FileProtocolHandler"])
    } else {
        ("xdg-open", &[])
    }
}
