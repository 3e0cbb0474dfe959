/// Which of the two forms the flow is presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Login,
    Signup,
}

impl ViewState {
    /// The other view.
    pub fn toggled(self) -> Self {
        match self {
            ViewState::Login => ViewState::Signup,
            ViewState::Signup => ViewState::Login,
        }
    }
}

/// Outcome of the most recent submission attempt.
///
/// `Succeeded` and `Failed` carry the user-facing message for the banner;
/// provider failures keep the provider's wording verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    /// Message carried by a resolved status, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            RequestStatus::Succeeded(message) | RequestStatus::Failed(message) => Some(message),
            RequestStatus::Idle | RequestStatus::Pending => None,
        }
    }
}

/// Raw text of the form inputs.
///
/// Starts empty and is mutated per keystroke. No operation clears it;
/// dropping the flow is the only reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
