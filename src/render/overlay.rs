//! Transient notices shown over the play field

/// How long a notice stays up
pub const NOTICE_SECONDS: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    text: String,
    remaining: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    notice: Option<Notice>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current notice
    pub fn show(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            remaining: NOTICE_SECONDS,
        });
    }

    /// Count down by one displayed frame
    pub fn update(&mut self, dt_seconds: f32) {
        if let Some(notice) = &mut self.notice {
            notice.remaining -= dt_seconds;
            if notice.remaining <= 0.0 {
                self.notice = None;
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }
}
