// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};
use url::Url;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Generic enquiry text used whenever no listing has been focused yet.
pub const DEFAULT_MESSAGE: &str = "నమస్తే, మీ వెబ్‌సైట్‌లో ఉన్న ఇల్లు గురించి వివరాలు కావాలి.";

/// Keep only the digits of a phone identifier; spaces, dashes, and the
/// leading plus are all separators as far as wa.me is concerned.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Pre-filled enquiry text: listing-specific when a location is known,
/// otherwise the fixed generic message.
pub fn contact_message(location: Option<&str>) -> String {
    match location {
        Some(location) => format!("నమస్తే, {location} ఇల్లు గురించి వివరాలు కావాలి."),
        None => DEFAULT_MESSAGE.to_owned(),
    }
}

/// Build the click-to-chat deep link. The message lands in the `text`
/// query parameter, URL-encoded by the `url` crate.
pub fn build_handoff_url(phone: &str, message: &str) -> Result<Url> {
    let digits = sanitize_phone(phone);
    if digits.is_empty() {
        bail!("contact phone {phone:?} contains no digits");
    }

    Url::parse_with_params(&format!("{WHATSAPP_BASE}/{digits}"), [("text", message)])
        .with_context(|| format!("build chat link for phone {digits}"))
}

/// Hand the link to the host environment and return immediately. The
/// opener runs detached; nothing waits on it and no output is collected.
pub fn request_open(url: &Url) -> Result<()> {
    let mut command = opener_command();
    command
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("launch opener for {url}"))?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn opener_command() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command() -> Command {
    Command::new("xdg-open")
}
