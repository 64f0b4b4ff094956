use sift::config::SiftConfig;
use sift::core::style::app_style;
use sift::engine::Sift;
use sift::message::{Message, Screen};
use sift::toast;

#[tokio::main]
async fn main() {
    let config = SiftConfig::load(&SiftConfig::default_path());

    // Set up logging to the systemd user journal (`journalctl --user -t sift -f`).
    // Wrapper filters: sift crate at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                if metadata.target().starts_with("sift") {
                    let max = if sift::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()
            .expect("journal logger unavailable")
            .with_syslog_identifier("sift".to_string());

        sift::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal }))
            .expect("logger already installed");
        // Global max must be Debug so sift debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    let skip_setup = std::env::args().any(|a| a == "--skip-setup");
    let undo_window = std::time::Duration::from_secs(config.undo_window_secs);
    let mut app = Sift::seeded(config);

    println!("=== {} — Noise off. Focus on. ===\n", Screen::Landing.title());

    if skip_setup {
        // "Preview my morning" goes straight to the inbox.
        app.update(Message::Navigate(Screen::Inbox))
            .expect("landing reaches the inbox");
    } else {
        app.update(Message::Navigate(Screen::Onboarding))
            .expect("landing reaches setup");
        app.update(Message::SelectOption(0, "Education".into()))
            .expect("known option");
        app.update(Message::SelectOption(0, "Family".into()))
            .expect("known option");
        app.update(Message::AdvanceWizard).expect("in setup");
        app.update(Message::SelectOption(1, "Student".into()))
            .expect("known option");
        let view = app.onboarding();
        println!(
            "Setup step {}/{}: {} ({:.0}%)",
            view.step_index + 1,
            view.total_steps,
            view.current.title,
            view.progress * 100.0
        );
        println!("Skipping the rest of setup...\n");
        app.update(Message::SkipWizard).expect("in setup");
    }

    let briefing = app.briefing();
    println!("{} I blocked {} notifications while you slept.", briefing.headline, briefing.blocked_count);
    println!("\n--- {} ---", Screen::Inbox.title());
    for n in app.priority_feed() {
        let marker = if n.urgent { "!" } else { " " };
        println!("  [{marker}] {} — {} ({})", n.source_app, n.title, n.category);
    }

    // Mark the top item done, then change our mind within the window.
    let first_id = app
        .priority_feed()
        .first()
        .map(|n| n.id.clone())
        .expect("seeded feed is not empty");
    let generation = app.mark_done(&first_id).expect("id is in the store");
    let timer = tokio::spawn(toast::expiry_timer(generation, undo_window));
    println!("\nToast: {:?}", app.toast().message);
    app.update(Message::Undo).expect("undo never fails");
    println!("Undo taken — {} items back in the feed.", app.priority_feed().len());
    timer.abort();

    // Mark it done again and let the toast run out.
    let generation = app.mark_done(&first_id).expect("id is in the store");
    println!("Marked done again; letting the undo window lapse ({}s)...", undo_window.as_secs());
    let expired = toast::expiry_timer(generation, undo_window).await;
    app.update(expired).expect("expiry never fails");
    println!("Toast visible: {}", app.toast().visible);

    app.update(Message::Navigate(Screen::Vault)).expect("tab navigation");
    println!("\n--- {} — Everything else. ---", Screen::Vault.title());
    for group in app.vault_groups() {
        let style = app_style(&group.app);
        println!("  {} ({}) [{}]", group.app, group.count(), style.icon_name);
        for n in &group.items {
            println!("      {} — {}", n.timestamp.format("%H:%M"), n.title);
        }
    }

    app.update(Message::Navigate(Screen::Calendar)).expect("tab navigation");
    println!("\n--- {} ---", Screen::Calendar.title());
    for n in app.agenda() {
        println!("  {}  {} ({})", n.timestamp.format("%m-%d %H:%M"), n.title, n.source_app);
    }
}
