//! Auth modal form state.
//!
//! DESIGN
//! ======
//! Login and register each statically list their fields, so the modal never
//! indexes into a field map by mode name. The form is local to one modal
//! instance: created on open, cleared on success, dropped on close.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::actions::AuthAction;
use crate::net::types::{LoginCredentials, RegisterFields};

/// Which auth flow the modal is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    #[default]
    Register,
}

/// Form inputs, one per backing field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Username,
    Email,
    Password,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Static description of one rendered input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

const LOGIN_FIELDS: &[FormField] = &[
    FormField { id: FieldId::Username, input_type: "text", placeholder: "Username" },
    FormField { id: FieldId::Password, input_type: "password", placeholder: "Password" },
];

const REGISTER_FIELDS: &[FormField] = &[
    FormField { id: FieldId::Name, input_type: "text", placeholder: "Full Name" },
    FormField { id: FieldId::Username, input_type: "text", placeholder: "Username" },
    FormField { id: FieldId::Email, input_type: "email", placeholder: "Email" },
    FormField { id: FieldId::Password, input_type: "password", placeholder: "Password" },
];

impl AuthMode {
    pub fn fields(self) -> &'static [FormField] {
        match self {
            Self::Login => LOGIN_FIELDS,
            Self::Register => REGISTER_FIELDS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Prompt shown next to the mode switch.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Register => "Already have an account?",
        }
    }

    /// Label of the mode switch link.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Login => "Register",
            Self::Register => "Login",
        }
    }
}

/// Values typed into the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::Username => self.username = value,
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
        }
    }

    /// Wipe typed values, keeping the current mode.
    pub fn clear(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn switch_mode(&mut self) {
        self.mode = self.mode.other();
    }

    /// Build the action for the current mode. Field validation is left to the backend.
    pub fn action(&self) -> AuthAction {
        match self.mode {
            AuthMode::Login => AuthAction::login(LoginCredentials {
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            AuthMode::Register => AuthAction::register(RegisterFields {
                name: self.name.clone(),
                username: self.username.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            }),
        }
    }
}
