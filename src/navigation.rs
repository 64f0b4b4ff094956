use crate::error::{EngineError, Result};
use crate::message::Screen;

/// Screen state machine.
///
/// `Landing` and `Onboarding` are entry states; `Inbox`, `Vault` and
/// `Calendar` form the main cluster with free movement between them.
/// Leaving `Onboarding` happens only through wizard completion, and
/// once in the main cluster the entry states are unreachable.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Screen::Landing,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    fn allowed(from: Screen, to: Screen) -> bool {
        match from {
            // "Get Started" or "Preview my morning".
            Screen::Landing => matches!(to, Screen::Onboarding | Screen::Inbox),
            // Only the wizard's complete/skip leaves this screen.
            Screen::Onboarding => false,
            Screen::Inbox | Screen::Vault | Screen::Calendar => to.has_tab_bar(),
        }
    }

    /// Move to `to` if the command set permits it from the current screen.
    pub fn navigate(&mut self, to: Screen) -> Result<()> {
        if !Self::allowed(self.current, to) {
            return Err(EngineError::InvalidTransition(format!(
                "{:?} -> {:?}",
                self.current, to
            )));
        }
        if self.current != to {
            log::info!("screen: {:?} -> {:?}", self.current, to);
        }
        self.current = to;
        Ok(())
    }

    /// Wizard finished or skipped; land on the inbox.
    pub fn complete_onboarding(&mut self) -> Result<()> {
        if self.current != Screen::Onboarding {
            return Err(EngineError::InvalidTransition(format!(
                "complete onboarding from {:?}",
                self.current
            )));
        }
        log::info!("screen: Onboarding -> Inbox");
        self.current = Screen::Inbox;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_cluster(screen: Screen) -> Navigator {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Inbox).unwrap();
        nav.navigate(screen).unwrap();
        nav
    }

    #[test]
    fn starts_on_landing() {
        assert_eq!(Navigator::new().current(), Screen::Landing);
    }

    #[test]
    fn landing_reaches_onboarding_and_inbox_only() {
        let mut nav = Navigator::new();
        assert!(nav.navigate(Screen::Vault).is_err());
        assert!(nav.navigate(Screen::Calendar).is_err());
        assert!(nav.navigate(Screen::Onboarding).is_ok());

        let mut nav = Navigator::new();
        assert!(nav.navigate(Screen::Inbox).is_ok());
    }

    #[test]
    fn main_cluster_is_fully_connected() {
        for from in [Screen::Inbox, Screen::Vault, Screen::Calendar] {
            for to in [Screen::Inbox, Screen::Vault, Screen::Calendar] {
                let mut nav = in_cluster(from);
                assert!(nav.navigate(to).is_ok(), "{from:?} -> {to:?}");
                assert_eq!(nav.current(), to);
            }
        }
    }

    #[test]
    fn onboarding_is_a_one_way_gate() {
        for from in [Screen::Inbox, Screen::Vault, Screen::Calendar] {
            let mut nav = in_cluster(from);
            assert!(nav.navigate(Screen::Onboarding).is_err());
            assert!(nav.navigate(Screen::Landing).is_err());
            // Rejected commands leave the screen unchanged.
            assert_eq!(nav.current(), from);
        }
    }

    #[test]
    fn direct_navigation_cannot_leave_onboarding() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Onboarding).unwrap();
        assert!(nav.navigate(Screen::Inbox).is_err());
        nav.complete_onboarding().unwrap();
        assert_eq!(nav.current(), Screen::Inbox);
    }

    #[test]
    fn completing_onboarding_twice_is_rejected() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Onboarding).unwrap();
        nav.complete_onboarding().unwrap();
        let err = nav.complete_onboarding().unwrap_err();
        assert!(matches!(err, EngineError::InvalidTransition(_)));
        assert_eq!(nav.current(), Screen::Inbox);
    }
}
