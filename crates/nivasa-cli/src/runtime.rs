// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use nivasa_handoff::{build_handoff_url, request_open};
use url::Url;

/// Production contact channel: builds the wa.me deep link from the
/// configured phone and hands it to the platform opener.
pub struct WhatsAppRuntime {
    phone: String,
}

impl WhatsAppRuntime {
    pub fn new(phone: &str) -> Self {
        Self {
            phone: phone.to_owned(),
        }
    }

    fn handoff_url(&self, message: &str) -> Result<Url> {
        build_handoff_url(&self.phone, message)
    }
}

impl nivasa_tui::ContactRuntime for WhatsAppRuntime {
    fn open_contact(&mut self, message: &str) -> Result<Url> {
        let url = self.handoff_url(message)?;
        request_open(&url)?;
        Ok(url)
    }
}
