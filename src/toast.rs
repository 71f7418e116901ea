//! Toast notifications.
//!
//! A [`Toaster`] lives in context for the whole app, so a toast raised by a
//! request that finishes after its page unmounted still shows up.

use leptos::logging::log;
use leptos::*;
use std::time::Duration;
use uuid::Uuid;

pub const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Info, message.into())
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message.into())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) -> Uuid {
        log!("[TOAST] {:?}: {}", kind, message);
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message,
        };
        let id = toast.id;
        self.toasts.try_update(|toasts| toasts.push(toast));
        self.schedule_dismiss(id);
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let toaster = *self;
        spawn_local(async move {
            gloo_timers::future::sleep(TOAST_TIMEOUT).await;
            toaster.dismiss(id);
        });
    }

    // No timers outside the browser; toasts stay until dismissed.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

/// The app's `Toaster`, or a new one provided on the spot.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        let toaster = Toaster::new();
        provide_context(toaster);
        toaster
    })
}
