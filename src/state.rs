use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum FlashKind {
    Success,
    Error,
}

/// Transient toast shown in the shell corner; one message at a time.
#[derive(Clone, Copy)]
pub struct FlashState {
    pub msg: Signal<Option<(FlashKind, String)>>,
}

impl FlashState {
    pub fn success(&self, text: impl Into<String>) {
        let mut msg = self.msg;
        msg.set(Some((FlashKind::Success, text.into())));
    }

    pub fn error(&self, text: impl Into<String>) {
        let mut msg = self.msg;
        msg.set(Some((FlashKind::Error, text.into())));
    }

    pub fn clear(&self) {
        let mut msg = self.msg;
        msg.set(None);
    }
}
