//! Transient user feedback.
//!
//! The form only ever talks to a [`Notifier`]. At runtime that is a
//! [`ToastSender`] whose messages are drained once per frame into [`Toasts`],
//! which keeps them on screen for [`TOAST_LIFETIME`].

use std::sync::mpsc;
use std::time::{Duration, Instant};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Fire-and-forget sink for success and error messages.
pub trait Notifier {
    fn report_success(&self, message: &str);
    fn report_error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastSender {
    tx: mpsc::Sender<(ToastKind, String)>,
}

impl ToastSender {
    fn send(&self, kind: ToastKind, message: &str) {
        if let Err(e) = self.tx.send((kind, message.to_string())) {
            tracing::warn!("Failed to deliver toast: {}", e);
        }
    }
}

impl Notifier for ToastSender {
    fn report_success(&self, message: &str) {
        self.send(ToastKind::Success, message);
    }

    fn report_error(&self, message: &str) {
        self.send(ToastKind::Error, message);
    }
}

#[derive(Debug)]
pub struct Toasts {
    rx: mpsc::Receiver<(ToastKind, String)>,
    active: Vec<Toast>,
    lifetime: Duration,
}

pub fn toast_channel() -> (ToastSender, Toasts) {
    let (tx, rx) = mpsc::channel();
    (
        ToastSender { tx },
        Toasts {
            rx,
            active: Vec::new(),
            lifetime: TOAST_LIFETIME,
        },
    )
}

impl Toasts {
    /// Moves pending messages on screen and drops the ones older than the
    /// lifetime. Returns true if anything changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let before = self.active.len();
        let mut received = false;
        while let Ok((kind, message)) = self.rx.try_recv() {
            self.active.push(Toast {
                kind,
                message,
                shown_at: now,
            });
            received = true;
        }

        let lifetime = self.lifetime;
        self.active
            .retain(|t| now.saturating_duration_since(t.shown_at) < lifetime);
        received || self.active.len() != before
    }

    pub fn active(&self) -> &[Toast] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
