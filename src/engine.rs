use chrono::NaiveDateTime;

use crate::config::SiftConfig;
use crate::core::feed::{self, AppGroup, Briefing};
use crate::core::notification::Notification;
use crate::core::store::NotificationStore;
use crate::error::{EngineError, Result};
use crate::message::{Message, Screen};
use crate::navigation::Navigator;
use crate::onboarding::{Advance, StepDef, Wizard};
use crate::toast::{ToastController, ToastState};

/// Snapshot of the wizard for the setup screen.
#[derive(Debug, Clone)]
pub struct OnboardingView<'a> {
    pub step_index: usize,
    pub total_steps: usize,
    pub progress: f32,
    pub current: &'static StepDef,
    pub selections: &'a [String],
}

/// The triage engine: owns the notification store, the screen state
/// machine, the setup wizard, and the undo toast.
///
/// Single-writer: all mutation goes through the command methods (or
/// [`Sift::update`]); a multi-threaded host must serialize them behind
/// one lock. Queries derive everything from the store on each call;
/// there is no cached state to invalidate.
pub struct Sift {
    config: SiftConfig,
    store: NotificationStore,
    nav: Navigator,
    wizard: Wizard,
    toast: ToastController,
}

impl Sift {
    pub fn new(config: SiftConfig, seed: Vec<Notification>) -> Self {
        let toast = ToastController::new(config.undo_window());
        let store = NotificationStore::new(seed, config.recently_removed_cap);
        Self {
            config,
            store,
            nav: Navigator::new(),
            wizard: Wizard::new(),
            toast,
        }
    }

    /// Engine preloaded with the demo feed.
    pub fn seeded(config: SiftConfig) -> Self {
        Self::new(config, crate::seed::notifications())
    }

    fn now() -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    // --- Queries ---

    pub fn config(&self) -> &SiftConfig {
        &self.config
    }

    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.current()
    }

    /// Notifications needing attention now, in working-set order.
    pub fn priority_feed(&self) -> Vec<Notification> {
        feed::priority_feed(self.store.items())
    }

    /// The vault: everything not in the priority feed, grouped by app.
    pub fn vault_groups(&self) -> Vec<AppGroup> {
        feed::group_by_app(&feed::vault_items(self.store.items()))
    }

    /// Every current notification in chronological order.
    pub fn agenda(&self) -> Vec<Notification> {
        feed::agenda(self.store.items())
    }

    pub fn briefing(&self) -> Briefing {
        feed::briefing()
    }

    pub fn toast(&self) -> ToastState {
        self.toast.state()
    }

    /// Deadline of the armed undo, if any.
    pub fn toast_deadline(&self) -> Option<NaiveDateTime> {
        self.toast.expires_at()
    }

    pub fn onboarding(&self) -> OnboardingView<'_> {
        let step = self.wizard.step_index();
        OnboardingView {
            step_index: step,
            total_steps: self.wizard.total_steps(),
            progress: self.wizard.progress(),
            current: self.wizard.current_step(),
            // Current step is always in range.
            selections: self.wizard.selections(step).unwrap_or(&[]),
        }
    }

    // --- Commands ---

    /// Remove a notification and arm the undo toast for it. Returns the
    /// arming generation; the host should spawn
    /// [`crate::toast::expiry_timer`] with it.
    pub fn mark_done(&mut self, id: &str) -> Result<u64> {
        self.store.remove(id)?;
        let generation = self.toast.arm(id, Self::now());
        log::debug!("marked done: {id} (generation {generation})");
        Ok(generation)
    }

    /// Restore the armed notification, if any. With nothing armed this
    /// does nothing; an idle undo signals nothing to revert.
    pub fn undo(&mut self) {
        let Some(id) = self.toast.armed_id().map(str::to_string) else {
            log::debug!("undo with nothing armed");
            return;
        };
        if let Err(e) = self.store.restore(&id) {
            // Armed entry fell off the capped side list.
            log::warn!("undo could not restore {id}: {e}");
        } else {
            log::debug!("restored: {id}");
        }
        self.toast.disarm();
    }

    /// Timer callback for an arming generation. Stale generations (a
    /// later mark-done superseded the arming) are dropped; the removed
    /// record stays on the side list either way.
    pub fn toast_expired(&mut self, generation: u64) {
        if self.toast.expire(generation) {
            log::debug!("undo window elapsed (generation {generation})");
        }
    }

    pub fn navigate(&mut self, to: Screen) -> Result<()> {
        self.nav.navigate(to)?;
        if to == Screen::Onboarding {
            self.wizard.reset();
        }
        Ok(())
    }

    fn require_onboarding(&self) -> Result<()> {
        if self.nav.current() != Screen::Onboarding {
            return Err(EngineError::InvalidTransition(format!(
                "wizard command on {:?}",
                self.nav.current()
            )));
        }
        Ok(())
    }

    pub fn select_option(&mut self, step: usize, option: &str) -> Result<()> {
        self.require_onboarding()?;
        self.wizard.select_option(step, option)
    }

    /// Next wizard step; from the final step this completes setup and
    /// lands on the inbox.
    pub fn advance_wizard(&mut self) -> Result<()> {
        self.require_onboarding()?;
        match self.wizard.advance() {
            Advance::Continued => Ok(()),
            Advance::Completed => self.nav.complete_onboarding(),
        }
    }

    /// Bail out of setup, discarding answers, straight to the inbox.
    pub fn skip_wizard(&mut self) -> Result<()> {
        self.require_onboarding()?;
        self.wizard.skip();
        self.nav.complete_onboarding()
    }

    /// Message dispatcher for hosts that drive the engine through a
    /// command queue.
    pub fn update(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Navigate(screen) => self.navigate(screen),
            Message::MarkDone(id) => self.mark_done(&id).map(|_| ()),
            Message::Undo => {
                self.undo();
                Ok(())
            }
            Message::ToastExpired(generation) => {
                self.toast_expired(generation);
                Ok(())
            }
            Message::SelectOption(step, option) => self.select_option(step, &option),
            Message::AdvanceWizard => self.advance_wizard(),
            Message::SkipWizard => self.skip_wizard(),
        }
    }
}
