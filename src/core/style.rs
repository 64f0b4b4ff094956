/// Display descriptor for a source app: icon id plus tint id, resolved
/// by the presentation layer against its own theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppStyle {
    pub icon_name: &'static str,
    pub tint: &'static str,
}

const APP_STYLES: &[(&str, AppStyle)] = &[
    ("Canvas", AppStyle { icon_name: "school-symbolic", tint: "red" }),
    ("Bank", AppStyle { icon_name: "payment-card-symbolic", tint: "yellow" }),
    ("Stocks", AppStyle { icon_name: "go-up-symbolic", tint: "emerald" }),
    ("WhatsApp", AppStyle { icon_name: "chat-symbolic", tint: "green" }),
    ("Slack", AppStyle { icon_name: "mail-mark-important-symbolic", tint: "purple" }),
    ("Instagram", AppStyle { icon_name: "camera-photo-symbolic", tint: "pink" }),
    ("Email", AppStyle { icon_name: "mail-unread-symbolic", tint: "blue" }),
    ("Google Meet", AppStyle { icon_name: "camera-web-symbolic", tint: "blue" }),
];

const FALLBACK: AppStyle = AppStyle {
    icon_name: "preferences-system-notifications-symbolic",
    tint: "gray",
};

/// Look up the descriptor for a source app; unknown apps get the
/// generic bell. Exact match, same key as vault grouping.
pub fn app_style(app: &str) -> AppStyle {
    APP_STYLES
        .iter()
        .find(|(name, _)| *name == app)
        .map(|(_, style)| *style)
        .unwrap_or(FALLBACK)
}
