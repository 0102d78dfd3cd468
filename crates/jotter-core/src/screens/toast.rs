use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    #[default]
    Short,
}

impl ToastDuration {
    pub const fn as_duration(self) -> Duration {
        match self {
            Self::Short => Duration::from_millis(2000),
        }
    }
}

/// Short-lived notification; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: ToastDuration,
}

impl Toast {
    pub fn short(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: ToastDuration::Short,
        }
    }
}
