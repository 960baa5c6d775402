use crate::common::RequestId;

/// Whether the form signs in to an existing account or creates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::Register => "Register",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Login successful",
            AuthMode::Register => "Registration successful",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialField {
    #[default]
    Email,
    Password,
}

impl CredentialField {
    pub fn toggle(self) -> Self {
        match self {
            CredentialField::Email => CredentialField::Password,
            CredentialField::Password => CredentialField::Email,
        }
    }
}

/// Credential screen state.
///
/// Holds only transient form input. It never touches the session; a
/// successful sign-in is observed through the auth gateway subscription.
#[derive(Debug, Clone, Default)]
pub struct CredentialState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub focus: CredentialField,
    /// In-flight sign-in or registration.
    pub pending: Option<RequestId>,
}

impl CredentialState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            CredentialField::Email => &mut self.email,
            CredentialField::Password => &mut self.password,
        }
    }
}
