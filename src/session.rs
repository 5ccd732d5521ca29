use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::parser;
use crate::transport::Transport;

/// Status line shown to the user while a capture runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ready,
    NotApplicable,
    Scraping,
    Saved(Option<String>),
    Error(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready."),
            Status::NotApplicable => write!(f, "Not a LinkedIn profile page."),
            Status::Scraping => write!(f, "Scraping..."),
            Status::Saved(Some(message)) => write!(f, "{}", message),
            Status::Saved(None) => write!(f, "Profile saved."),
            Status::Error(detail) => write!(f, "Error: {}", detail),
        }
    }
}

/// The single result a capture hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Saved { message: Option<String> },
    Failed { detail: String },
    NotApplicable,
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Outcome::Saved { message } => Status::Saved(message.clone()),
            Outcome::Failed { detail } => Status::Error(detail.clone()),
            Outcome::NotApplicable => Status::NotApplicable,
        }
    }
}

/// Save control: at most one capture in flight.
#[derive(Debug, Default)]
pub struct SaveControl {
    busy: AtomicBool,
}

impl SaveControl {
    pub fn try_begin(&self) -> Option<InFlight<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { control: self })
    }
}

/// Releases the save control when dropped.
pub struct InFlight<'a> {
    control: &'a SaveControl,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.control.busy.store(false, Ordering::Release);
    }
}

pub fn is_profile_url(url: &str, marker: &str) -> bool {
    !marker.is_empty() && url.contains(marker)
}

pub struct Session {
    transport: Transport,
    profile_marker: String,
    control: SaveControl,
}

impl Session {
    pub fn new(transport: Transport, profile_marker: impl Into<String>) -> Self {
        Session {
            transport,
            profile_marker: profile_marker.into(),
            control: SaveControl::default(),
        }
    }

    /// Extract the page and send it. Reports progress through `on_status`
    /// and always ends with the status of the returned outcome.
    pub async fn capture(
        &self,
        url: &str,
        html: &str,
        mut on_status: impl FnMut(Status),
    ) -> Outcome {
        let outcome = self.run(url, html, &mut on_status).await;
        on_status(outcome.status());
        outcome
    }

    async fn run(&self, url: &str, html: &str, on_status: &mut impl FnMut(Status)) -> Outcome {
        if !is_profile_url(url, &self.profile_marker) {
            info!("Skipping {}: not a profile page", url);
            return Outcome::NotApplicable;
        }

        let Some(_guard) = self.control.try_begin() else {
            warn!("Capture requested while another is in flight");
            return Outcome::Failed {
                detail: "a save is already in progress".to_string(),
            };
        };

        on_status(Status::Scraping);
        let profile = parser::process_page(html, Some(url));

        match self.transport.send(&profile).await {
            Ok(message) => Outcome::Saved { message },
            Err(e) => Outcome::Failed {
                detail: e.to_string(),
            },
        }
    }
}

// ── Tests ──
