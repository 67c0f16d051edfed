//! Session resume at startup

mod common;

use common::{Harness, MockProvider};
use lib_wallet::{ConnectionStatus, ProviderKind};

#[tokio::test]
async fn test_resume_redirect_session() {
    let identity = MockProvider::identity().with_account("rwlgt-iiaaa-aaaaa-aaaaa-cai");
    identity.authenticated.set(true);
    let h = Harness::with_providers(MockProvider::plug(), identity);

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.status, ConnectionStatus::Connected);
    assert_eq!(snapshot.provider_kind, Some(ProviderKind::RedirectIdentity));
    assert_eq!(snapshot.account_id.as_deref(), Some("rwlgt-iiaaa-aaaaa-aaaaa-cai"));

    // The extension is not consulted once a redirect session is found
    assert_eq!(h.plug.called("is_authenticated"), 0);
}

#[tokio::test]
async fn test_initializing_is_published_first() {
    let identity = MockProvider::identity();
    identity.authenticated.set(true);
    let h = Harness::with_providers(MockProvider::plug(), identity);

    h.controller.initialize().await;

    let statuses: Vec<_> = h.published.borrow().iter().map(|s| s.status).collect();
    assert_eq!(statuses, vec![ConnectionStatus::Initializing, ConnectionStatus::Connected]);
}

#[tokio::test]
async fn test_resume_injected_session() {
    let plug = MockProvider::plug().with_account("d2ws6-6dxfc-ktmgz-2ejai");
    plug.authenticated.set(true);
    let h = Harness::with_providers(plug, MockProvider::identity());

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.status, ConnectionStatus::Connected);
    assert_eq!(snapshot.provider_kind, Some(ProviderKind::InjectedExtension));
    assert_eq!(snapshot.account_id.as_deref(), Some("d2ws6-6dxfc-ktmgz-2ejai"));
}

#[tokio::test]
async fn test_identity_client_failure_falls_back_to_extension() {
    let identity = MockProvider::identity();
    identity.init_fails.set(true);
    let plug = MockProvider::plug();
    plug.authenticated.set(true);
    let h = Harness::with_providers(plug, identity);

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.provider_kind, Some(ProviderKind::InjectedExtension));
    assert!(h.sink.notifications.borrow().is_empty());
}

#[tokio::test]
async fn test_identity_client_failure_degrades_to_disconnected() {
    let identity = MockProvider::identity();
    identity.init_fails.set(true);
    let h = Harness::with_providers(MockProvider::plug(), identity);

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.status, ConnectionStatus::Disconnected);
    assert!(h.sink.notifications.borrow().is_empty());
}

#[tokio::test]
async fn test_unavailable_extension_is_not_queried() {
    let plug = MockProvider::plug();
    plug.available.set(false);
    plug.authenticated.set(true);
    let h = Harness::with_providers(plug, MockProvider::identity());

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.status, ConnectionStatus::Disconnected);
    assert_eq!(h.plug.called("is_authenticated"), 0);
}

#[tokio::test]
async fn test_account_fetch_failure_during_resume() {
    let identity = MockProvider::identity();
    identity.authenticated.set(true);
    identity.account_fails.set(true);
    let h = Harness::with_providers(MockProvider::plug(), identity);

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.status, ConnectionStatus::Disconnected);
    assert_eq!(snapshot.account_id, None);
}

#[tokio::test]
async fn test_no_session_ends_disconnected() {
    let h = Harness::new();

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.status, ConnectionStatus::Disconnected);
    assert_eq!(h.identity.called("is_authenticated"), 1);
    assert_eq!(h.plug.called("is_authenticated"), 1);
}

#[tokio::test]
async fn test_initialize_runs_once() {
    let h = Harness::new();
    h.controller.initialize().await;
    h.plug.authenticated.set(true);

    let snapshot = h.controller.initialize().await;

    assert_eq!(snapshot.status, ConnectionStatus::Disconnected);
    assert_eq!(h.plug.called("is_authenticated"), 1);
}

#[tokio::test]
async fn test_resumed_session_can_disconnect() {
    let identity = MockProvider::identity();
    identity.authenticated.set(true);
    let h = Harness::with_providers(MockProvider::plug(), identity);
    h.controller.initialize().await;

    assert!(h.controller.disconnect().await);

    assert_eq!(h.identity.called("request_disconnect"), 1);
    assert_eq!(h.controller.snapshot().status, ConnectionStatus::Disconnected);
}
