/// The five screens the engine can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Hero screen shown at launch.
    Landing,
    /// Guided setup wizard. One-way: never reachable again once left.
    Onboarding,
    /// Priority feed ("Focus Inbox").
    Inbox,
    /// Archived notifications grouped by app.
    Vault,
    /// Chronological agenda of everything.
    Calendar,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "FocusAI",
            Self::Onboarding => "Setup",
            Self::Inbox => "Focus Inbox",
            Self::Vault => "Vault",
            Self::Calendar => "Calendar",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Landing => "starred-symbolic",
            Self::Onboarding => "emblem-system-symbolic",
            Self::Inbox => "mail-folder-inbox-symbolic",
            Self::Vault => "open-menu-symbolic",
            Self::Calendar => "x-office-calendar-symbolic",
        }
    }

    /// Tab-bar order once past onboarding.
    pub const TABS: &'static [Screen] = &[Screen::Calendar, Screen::Inbox, Screen::Vault];

    /// Screens that show the persistent tab bar.
    pub fn has_tab_bar(&self) -> bool {
        matches!(self, Self::Inbox | Self::Vault | Self::Calendar)
    }
}

/// Commands the presentation layer dispatches to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    Navigate(Screen),

    // Triage
    MarkDone(String),
    Undo,
    /// Undo window elapsed for the tagged arming; stale tags are dropped.
    ToastExpired(u64),

    // Onboarding
    SelectOption(usize, String),
    AdvanceWizard,
    SkipWizard,
}
