use chrono::{Duration, NaiveDateTime};

use crate::message::Message;

/// Toast copy shown while an undo is armed.
pub const DONE_MESSAGE: &str = "Marked as done";

/// What the presentation layer needs to render the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    /// Id the Undo button would restore, when armed.
    pub pending_undo: Option<String>,
}

impl ToastState {
    fn hidden() -> Self {
        Self {
            visible: false,
            message: String::new(),
            pending_undo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed {
        id: String,
        generation: u64,
        expires_at: NaiveDateTime,
    },
}

/// Coordinates the reversible-delete window.
///
/// At most one undo is armed at a time; arming again supersedes the
/// previous one. Every arming gets a fresh generation so an expiry
/// callback scheduled for a superseded arming is recognized as stale
/// and ignored; the host never needs to cancel a timer.
#[derive(Debug, Clone)]
pub struct ToastController {
    phase: Phase,
    generations: u64,
    window: Duration,
}

impl ToastController {
    pub fn new(window: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            generations: 0,
            window,
        }
    }

    /// Arm an undo for `id`, superseding any prior arming. Returns the
    /// generation the host should tag its expiry timer with.
    pub fn arm(&mut self, id: &str, now: NaiveDateTime) -> u64 {
        self.generations += 1;
        self.phase = Phase::Armed {
            id: id.to_string(),
            generation: self.generations,
            expires_at: now + self.window,
        };
        self.generations
    }

    /// Settle the current arming (undo taken or superseded cleanup).
    pub fn disarm(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Handle an expiry callback. Only the generation currently armed
    /// has any effect; stale callbacks are ignored. Returns whether the
    /// toast was actually dismissed.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.phase {
            Phase::Armed { generation: armed, .. } if *armed == generation => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    pub fn armed_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Armed { id, .. } => Some(id),
            Phase::Idle => None,
        }
    }

    pub fn expires_at(&self) -> Option<NaiveDateTime> {
        match &self.phase {
            Phase::Armed { expires_at, .. } => Some(*expires_at),
            Phase::Idle => None,
        }
    }

    pub fn state(&self) -> ToastState {
        match &self.phase {
            Phase::Armed { id, .. } => ToastState {
                visible: true,
                message: DONE_MESSAGE.to_string(),
                pending_undo: Some(id.clone()),
            },
            Phase::Idle => ToastState::hidden(),
        }
    }
}

/// Sleep out the undo window, then produce the expiry message for the
/// generation it was armed for. Spawn one of these after every arming;
/// superseded ones deliver a stale generation that the engine drops.
pub async fn expiry_timer(generation: u64, window: std::time::Duration) -> Message {
    tokio::time::sleep(window).await;
    Message::ToastExpired(generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 24)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn make_controller() -> ToastController {
        ToastController::new(Duration::seconds(4))
    }

    #[test]
    fn arming_shows_toast_with_fixed_message() {
        let mut toast = make_controller();
        toast.arm("n1", now());
        let state = toast.state();
        assert!(state.visible);
        assert_eq!(state.message, DONE_MESSAGE);
        assert_eq!(state.pending_undo.as_deref(), Some("n1"));
        assert_eq!(toast.expires_at(), Some(now() + Duration::seconds(4)));
    }

    #[test]
    fn idle_state_is_hidden_and_empty() {
        let toast = make_controller();
        let state = toast.state();
        assert!(!state.visible);
        assert!(state.message.is_empty());
        assert!(state.pending_undo.is_none());
    }

    #[test]
    fn rearming_supersedes_previous_id() {
        let mut toast = make_controller();
        toast.arm("n1", now());
        toast.arm("n2", now());
        assert_eq!(toast.armed_id(), Some("n2"));
    }

    #[test]
    fn stale_generation_does_not_dismiss() {
        let mut toast = make_controller();
        let first = toast.arm("n1", now());
        let second = toast.arm("n2", now());
        // The timer armed for n1 fires after n2 took over.
        assert!(!toast.expire(first));
        assert!(toast.is_armed());
        assert!(toast.expire(second));
        assert!(!toast.is_armed());
    }

    #[test]
    fn expiry_while_idle_is_ignored() {
        let mut toast = make_controller();
        assert!(!toast.expire(1));
    }

    #[test]
    fn generations_increase_across_disarm() {
        let mut toast = make_controller();
        let first = toast.arm("n1", now());
        toast.disarm();
        let second = toast.arm("n1", now());
        assert!(second > first);
    }
}
