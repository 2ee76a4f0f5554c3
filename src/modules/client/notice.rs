use super::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

/// Inline feedback shown next to a form or list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: NoticeTone,
}

impl Notice {
    /// Text containing one of these (case-insensitive) reads as a success.
    pub const SUCCESS_MARKERS: [&'static str; 2] = ["success", "thank you"];

    /// Tone follows the text: error unless a success marker appears.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lowered = text.to_lowercase();
        let tone = if Self::SUCCESS_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            NoticeTone::Success
        } else {
            NoticeTone::Error
        };

        Self { text, tone }
    }

    /// Prefers the server's own message over `fallback`.
    pub fn from_error(fallback: &str, error: &ApiError) -> Self {
        Self::new(error.server_message().unwrap_or(fallback))
    }

    pub fn is_success(&self) -> bool {
        self.tone == NoticeTone::Success
    }
}
