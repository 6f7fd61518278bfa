use super::*;

// =============================================================
// Field tables
// =============================================================

#[test]
fn login_lists_username_and_password() {
    let ids: Vec<FieldId> = AuthMode::Login.fields().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![FieldId::Username, FieldId::Password]);
}

#[test]
fn register_lists_name_username_email_password() {
    let ids: Vec<FieldId> = AuthMode::Register.fields().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![FieldId::Name, FieldId::Username, FieldId::Email, FieldId::Password]);
}

#[test]
fn field_input_types_match_purpose() {
    for field in AuthMode::Register.fields() {
        let expected = match field.id {
            FieldId::Password => "password",
            FieldId::Email => "email",
            FieldId::Name | FieldId::Username => "text",
        };
        assert_eq!(field.input_type, expected, "field {}", field.id.as_str());
    }
}

#[test]
fn mode_labels_and_switch() {
    assert_eq!(AuthMode::Login.title(), "login");
    assert_eq!(AuthMode::Register.title(), "register");
    assert_eq!(AuthMode::Login.other(), AuthMode::Register);
    assert_eq!(AuthMode::Register.other(), AuthMode::Login);
    assert_eq!(AuthMode::Login.switch_label(), "Register");
    assert_eq!(AuthMode::Register.switch_label(), "Login");
}

// =============================================================
// AuthForm
// =============================================================

#[test]
fn set_and_value_address_the_same_field() {
    let mut form = AuthForm::new(AuthMode::Register);
    form.set(FieldId::Name, "Ada".to_owned());
    form.set(FieldId::Email, "ada@example.com".to_owned());
    assert_eq!(form.value(FieldId::Name), "Ada");
    assert_eq!(form.value(FieldId::Email), "ada@example.com");
    assert_eq!(form.value(FieldId::Username), "");
}

#[test]
fn clear_keeps_mode() {
    let mut form = AuthForm::new(AuthMode::Login);
    form.set(FieldId::Username, "a".to_owned());
    form.set(FieldId::Password, "b".to_owned());
    form.clear();
    assert_eq!(form, AuthForm::new(AuthMode::Login));
}

#[test]
fn switch_mode_keeps_typed_values() {
    let mut form = AuthForm::new(AuthMode::Register);
    form.set(FieldId::Username, "a".to_owned());
    form.switch_mode();
    assert_eq!(form.mode, AuthMode::Login);
    assert_eq!(form.username, "a");
}

#[test]
fn login_form_builds_login_action_without_register_fields() {
    let mut form = AuthForm::new(AuthMode::Login);
    form.set(FieldId::Name, "ignored".to_owned());
    form.set(FieldId::Username, "a".to_owned());
    form.set(FieldId::Password, "b".to_owned());
    assert_eq!(
        form.action(),
        AuthAction::login(LoginCredentials { username: "a".to_owned(), password: "b".to_owned() })
    );
}

#[test]
fn register_form_builds_register_action_with_blank_email() {
    let mut form = AuthForm::new(AuthMode::Register);
    form.set(FieldId::Name, "Ada".to_owned());
    form.set(FieldId::Username, "ada".to_owned());
    form.set(FieldId::Password, "pw".to_owned());
    assert_eq!(
        form.action(),
        AuthAction::register(RegisterFields {
            name: "Ada".to_owned(),
            username: "ada".to_owned(),
            email: String::new(),
            password: "pw".to_owned(),
        })
    );
}
