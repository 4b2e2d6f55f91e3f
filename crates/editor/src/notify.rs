//! Transient user notifications.

/// Mirrors the handful of toast flavours the editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Blank,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub icon: Option<String>,
}

impl Toast {
    pub fn blank(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Blank, message: message.into(), icon: None }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Loading, message: message.into(), icon: None }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into(), icon: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into(), icon: None }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Shows toasts to the user. Fire and forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Writes toasts to the log instead of a screen.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => tracing::warn!(icon = ?toast.icon, "{}", toast.message),
            _ => tracing::info!(kind = ?toast.kind, icon = ?toast.icon, "{}", toast.message),
        }
    }
}
