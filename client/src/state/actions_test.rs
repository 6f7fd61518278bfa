use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::net::testing::{ScriptedTransport, auth_json};
use crate::state::store::AuthStore;
use crate::util::session_storage::AUTH_DETAILS_KEY;
use crate::util::storage::MemoryStorage;

type Handle = Rc<RefCell<AuthStore<MemoryStorage>>>;

fn fresh_store() -> Handle {
    Rc::new(RefCell::new(AuthStore::open(MemoryStorage::new())))
}

fn seeded_store(token: &str) -> Handle {
    let mut storage = MemoryStorage::new();
    storage.set_item(AUTH_DETAILS_KEY, &auth_json(token, "1", "a", "user").to_string());
    Rc::new(RefCell::new(AuthStore::open(storage)))
}

fn api(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://api.test", transport.clone())
}

fn login_ab() -> AuthAction {
    AuthAction::login(LoginCredentials { username: "a".to_owned(), password: "b".to_owned() })
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_authenticates_persists_and_sets_bearer() {
    let transport = ScriptedTransport::new().reply(200, auth_json("tok1", "1", "a", "user"));
    let store = fresh_store();
    let called = Cell::new(false);

    let outcome = block_on(dispatch(api(&transport), store.clone(), login_ab(), || called.set(true)));

    assert_eq!(outcome, AuthOutcome::Authenticated);
    assert!(called.get());

    let s = store.borrow();
    assert!(s.state().is_authenticated());
    assert_eq!(s.state().access_token(), Some("tok1"));
    assert_eq!(s.state().user().map(|u| u.id.as_str()), Some("1"));
    let expected: AuthResponse = serde_json::from_value(auth_json("tok1", "1", "a", "user")).unwrap();
    assert_eq!(s.persistence().load(), Some(expected));
    assert_eq!(s.authorization_header().as_deref(), Some("Bearer tok1"));
}

#[test]
fn login_rejection_surfaces_backend_message() {
    let transport = ScriptedTransport::new().reply(401, serde_json::json!({ "message": "Invalid credentials" }));
    let store = fresh_store();
    let called = Cell::new(false);

    let outcome = block_on(dispatch(api(&transport), store.clone(), login_ab(), || called.set(true)));

    assert_eq!(outcome, AuthOutcome::Failed(AuthFailure::Rejected(ErrorMessage::from("Invalid credentials"))));
    assert!(!called.get());
    let s = store.borrow();
    assert!(s.state().error().is_error);
    assert_eq!(s.state().error().message, Some(ErrorMessage::from("Invalid credentials")));
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_with_missing_email_shows_message_list() {
    let transport =
        ScriptedTransport::new().reply(400, serde_json::json!({ "message": ["email is required"] }));
    let store = fresh_store();
    let action = AuthAction::register(RegisterFields {
        name: "A".to_owned(),
        username: "a".to_owned(),
        email: String::new(),
        password: "b".to_owned(),
    });

    let outcome = block_on(dispatch(api(&transport), store.clone(), action, || {}));

    let expected = ErrorMessage::List(vec!["email is required".to_owned()]);
    assert_eq!(outcome, AuthOutcome::Failed(AuthFailure::Rejected(expected.clone())));
    let s = store.borrow();
    assert!(s.state().error().is_error);
    assert_eq!(s.state().error().message, Some(expected));
    assert!(!s.state().is_authenticated());
    assert_eq!(transport.sent()[0].url, "http://api.test/auth/register");
}

#[test]
fn transport_failure_uses_error_description() {
    let transport = ScriptedTransport::new().fail(ApiError::Network("connection refused".to_owned()));
    let store = fresh_store();

    let outcome = block_on(dispatch(api(&transport), store.clone(), login_ab(), || {}));

    let description = "network error: connection refused".to_owned();
    assert_eq!(outcome, AuthOutcome::Failed(AuthFailure::Transport(description.clone())));
    assert_eq!(store.borrow().state().error().message, Some(ErrorMessage::Text(description)));
}

#[test]
fn failure_status_without_message_uses_status_description() {
    let transport = ScriptedTransport::new().reply_raw(500, "oops");
    let store = fresh_store();

    let outcome = block_on(dispatch(api(&transport), store, login_ab(), || {}));

    assert_eq!(
        outcome,
        AuthOutcome::Failed(AuthFailure::Transport("request failed with status 500".to_owned()))
    );
}

#[test]
fn failure_clears_previous_session() {
    let transport = ScriptedTransport::new().reply(401, serde_json::json!({ "message": "nope" }));
    let store = seeded_store("old");

    block_on(dispatch(api(&transport), store.clone(), login_ab(), || {}));

    let s = store.borrow();
    assert_eq!(s.state().access_token(), None);
    assert_eq!(s.state().user(), None);
    assert_eq!(s.persistence().load(), None);
    assert_eq!(s.bearer(), None);
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_uses_seeded_bearer_and_authenticates() {
    let transport = ScriptedTransport::new().reply(200, auth_json("tok2", "1", "a", "user"));
    let store = seeded_store("tok0");

    let outcome = block_on(dispatch(api(&transport), store.clone(), AuthAction::restore_session(), || {}));

    assert_eq!(outcome, AuthOutcome::Authenticated);
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "http://api.test/user/me");
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer tok0"));
    assert_eq!(store.borrow().authorization_header().as_deref(), Some("Bearer tok2"));
}

#[test]
fn restore_failure_is_silent_and_clears_record() {
    let transport = ScriptedTransport::new().reply(401, serde_json::json!({ "message": "Unauthorized" }));
    let store = seeded_store("expired");

    let outcome = block_on(dispatch(api(&transport), store.clone(), AuthAction::restore_session(), || {}));

    assert_eq!(outcome, AuthOutcome::Failed(AuthFailure::SilentRestore));
    let s = store.borrow();
    assert!(s.state().error().is_error);
    assert_eq!(s.state().error().message, None);
    assert_eq!(s.persistence().load(), None);
    assert_eq!(s.bearer(), None);
}

// =============================================================
// Loading visibility / submit gating / races
// =============================================================

#[test]
fn loading_is_visible_before_the_call_resolves() {
    let transport = ScriptedTransport::new().reply(200, auth_json("tok1", "1", "a", "user"));
    let store = fresh_store();

    let pending = dispatch(api(&transport), store.clone(), login_ab(), || {});
    assert!(store.borrow().state().is_loading());
    assert!(!can_submit(store.borrow().state()));
    assert!(transport.sent().is_empty());

    block_on(pending);
    assert!(!store.borrow().state().is_loading());
    assert!(can_submit(store.borrow().state()));
}

#[test]
fn logout_during_request_discards_late_success() {
    let transport = ScriptedTransport::new().reply(200, auth_json("late", "1", "a", "user"));
    let store = fresh_store();
    let called = Cell::new(false);

    let pending = dispatch(api(&transport), store.clone(), login_ab(), || called.set(true));
    store.borrow_mut().logout();
    let outcome = block_on(pending);

    assert_eq!(outcome, AuthOutcome::Superseded);
    assert!(!called.get());
    let s = store.borrow();
    assert!(!s.state().is_authenticated());
    assert!(s.persistence().backend().is_empty());
    assert_eq!(s.bearer(), None);
}

#[test]
fn newer_request_wins_over_older_one() {
    let transport = ScriptedTransport::new()
        .reply(200, auth_json("first", "1", "a", "user"))
        .reply(200, auth_json("second", "1", "a", "user"));
    let store = fresh_store();

    let first = dispatch(api(&transport), store.clone(), login_ab(), || {});
    let second = dispatch(api(&transport), store.clone(), login_ab(), || {});

    assert_eq!(block_on(first), AuthOutcome::Superseded);
    assert_eq!(block_on(second), AuthOutcome::Authenticated);
    assert_eq!(store.borrow().state().access_token(), Some("second"));
}

// =============================================================
// Classification
// =============================================================

#[test]
fn action_names_and_silence() {
    assert_eq!(login_ab().name(), "login");
    assert_eq!(AuthAction::restore_session().name(), "restore");
    assert!(AuthAction::restore_session().is_silent());
    assert!(!login_ab().is_silent());
}

#[test]
fn failure_messages() {
    assert_eq!(AuthFailure::SilentRestore.message(), None);
    assert_eq!(
        AuthFailure::Transport("down".to_owned()).message(),
        Some(ErrorMessage::Text("down".to_owned()))
    );
    assert_eq!(AuthFailure::Rejected(ErrorMessage::from("x")).to_string(), "x");
}
