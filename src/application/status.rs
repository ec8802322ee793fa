/// Kind of transient message shown under the controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    remaining: f32,
}

impl StatusMessage {
    /// Seconds left before the message disappears
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// StatusBar holds at most one message and expires it after a fixed time.
/// A new message replaces the current one.
#[derive(Clone, Debug)]
pub struct StatusBar {
    current: Option<StatusMessage>,
    lifetime: f32,
}

impl StatusBar {
    pub fn new(lifetime: f32) -> Self {
        Self { current: None, lifetime }
    }

    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
            remaining: self.lifetime,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(StatusKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(StatusKind::Error, text);
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// Advance time by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        if let Some(msg) = self.current.as_mut() {
            msg.remaining -= delta;
            if msg.remaining <= 0.0 {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires() {
        let mut bar = StatusBar::new(2.0);
        bar.success("Squares successfully merged!");
        bar.tick(1.5);
        assert_eq!(bar.current().map(|m| m.kind), Some(StatusKind::Success));
        bar.tick(0.6);
        assert!(bar.current().is_none());
    }

    #[test]
    fn test_new_message_replaces_old() {
        let mut bar = StatusBar::new(2.0);
        bar.success("first");
        bar.tick(1.9);
        bar.error("second");
        let msg = bar.current().unwrap();
        assert_eq!(msg.text, "second");
        assert_eq!(msg.remaining(), 2.0);
    }
}
