// SPDX-License-Identifier: MPL-2.0
use iced_subscriptions::app::{App, Message};
use iced_subscriptions::client::{FixtureClient, SubscriptionsClient};
use iced_subscriptions::config::{self, Config};
use iced_subscriptions::domain::Status;
use iced_subscriptions::i18n::fluent::I18n;
use iced_subscriptions::i18n::Translate;
use iced_subscriptions::ui::pointer::PointerButton;
use iced_subscriptions::ui::subscription_status::{StatusAction, SubscriptionStatus};
use iced_subscriptions::ui::subscriptions_page::{
    self, layout, CurtainsKind, Layout, ProductRow, Props,
};
use std::time::Instant;
use tempfile::tempdir;

const ACME_SNAPSHOT: &str = r#"
status = "registered-to-acme"

[[products]]
productId = "p1"
productName = "Acme Tools"
version = "1.0"
arch = "x86_64"
status = "subscribed"
starts = "2024-01-01"
ends = "2025-01-01"
"#;

fn english() -> I18n {
    I18n::new(Some("en-US".into()), &Config::default())
}

fn props(client: &FixtureClient) -> Props<'_> {
    let snapshot = client.snapshot();
    Props {
        status: &snapshot.status,
        error: snapshot.error.as_deref(),
        products: &snapshot.products,
        config_loaded: client.config().loaded,
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("en-US".to_string());
    config::save_to_path(&cfg, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("register-button"), "Register");

    cfg.general.language = Some("fr".to_string());
    config::save_to_path(&cfg, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("register-button"), "Enregistrer");
}

#[test]
fn loading_snapshot_shows_spinner_curtains() {
    let client =
        FixtureClient::from_toml("config_loaded = false").expect("snapshot should parse");
    let props = props(&client);

    assert_eq!(layout(&props), Layout::Curtains(CurtainsKind::Loading));
    assert!(subscriptions_page::is_animating(&props));

    let i18n = english();
    assert_eq!(i18n.tr(CurtainsKind::Loading.message_key()), "Updating");
    assert_eq!(
        i18n.tr(CurtainsKind::Loading.description_key()),
        "Retrieving subscription status..."
    );
}

#[test]
fn registered_snapshot_shows_product_detail() {
    let client = FixtureClient::from_toml(ACME_SNAPSHOT).expect("snapshot should parse");
    let props = props(&client);
    let i18n = english();

    assert_eq!(layout(&props), Layout::Detail);
    assert_eq!(props.products.len(), 1);

    let row = ProductRow::new(&props.products[0]);
    let fields = row.fields(&i18n);
    assert_eq!(fields[0].1, "Acme Tools");
    assert_eq!(fields[4].1, "Subscribed");

    let status = SubscriptionStatus::new(props.status, props.error);
    assert_eq!(status.action(), StatusAction::Unregister { enabled: true });
}

#[test]
fn error_banner_dismiss_keeps_status() {
    let client = FixtureClient::from_toml("status = \"registered\"\nerror = \"network timeout\"")
        .expect("snapshot should parse");
    let mut app = App::with_client(english(), Box::new(client));

    let _ = app.update(Message::Page(subscriptions_page::Message::DismissError(
        PointerButton::Secondary,
    )));
    assert_eq!(app.status(), &Status::Registered("registered".into()));

    let _ = app.update(Message::Page(subscriptions_page::Message::DismissError(
        PointerButton::Primary,
    )));
    assert_eq!(app.status(), &Status::Registered("registered".into()));

    let json = app.diagnostics().to_json().expect("export should succeed");
    let events: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let events = events.as_array().expect("array of events");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["action"]["action"], "ignored_click");
    assert_eq!(events[1]["action"]["action"], "dismiss_error");
}

#[test]
fn snapshot_file_changes_are_picked_up_on_poll() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("snapshot.toml");
    std::fs::write(&path, "status = \"Unknown\"").expect("write snapshot");

    let client = FixtureClient::from_path(&path).expect("snapshot should load");
    let mut app = App::with_client(english(), Box::new(client));
    assert_eq!(app.status(), &Status::Unknown);

    // Make sure the new write gets a different modification time.
    std::thread::sleep(std::time::Duration::from_millis(1100));
    std::fs::write(&path, ACME_SNAPSHOT).expect("rewrite snapshot");

    let _ = app.update(Message::Poll(Instant::now()));
    assert_eq!(
        app.status(),
        &Status::Registered("registered-to-acme".into())
    );
    assert_eq!(app.title(), "registered-to-acme - Subscriptions");
}

#[test]
fn missing_snapshot_is_reported() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = FixtureClient::from_path(&dir.path().join("absent.toml"));
    assert!(result.is_err());
}
