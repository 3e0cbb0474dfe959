use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use identity::password;
use identity::password::PasswordStrength;
use identity::provider::SignUpMetadata;

use crate::errors::AuthProviderError;
use crate::models::FormFields;
use crate::models::RequestStatus;
use crate::models::ViewState;
use crate::ports::AuthProvider;

/// Confirmation shown after a successful sign-in.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

/// Confirmation shown after a successful registration.
pub const SIGNUP_SUCCESS_MESSAGE: &str =
    "Signup successful! Please check your email to verify your account.";

/// Failure shown when the confirmation field does not match the password.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// State machine behind a login/signup surface.
///
/// Owns the form state for one authentication flow and orchestrates
/// submissions against an injected [`AuthProvider`]. Methods take `&self`
/// so an event loop can interleave view switches and field edits with an
/// in-flight submission; interior state sits behind a mutex that is never
/// held across an await.
pub struct AuthFlow<P>
where
    P: AuthProvider,
{
    provider: Arc<P>,
    state: Mutex<FlowState>,
}

#[derive(Debug)]
struct FlowState {
    view: ViewState,
    status: RequestStatus,
    fields: FormFields,
    /// Tag of the submission currently in flight. Bumped by every accepted
    /// submission and by view switches, so a response arriving for a
    /// superseded attempt can be recognized and discarded.
    generation: u64,
}

impl FlowState {
    /// Move to `Pending` and hand back the new generation tag together
    /// with a snapshot of the fields for the outgoing request.
    fn begin_attempt(&mut self) -> (u64, FormFields) {
        self.generation += 1;
        self.status = RequestStatus::Pending;
        (self.generation, self.fields.clone())
    }
}

impl<P> AuthFlow<P>
where
    P: AuthProvider,
{
    /// Create a flow presenting the login view with empty fields.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            state: Mutex::new(FlowState {
                view: ViewState::Login,
                status: RequestStatus::Idle,
                fields: FormFields::default(),
                generation: 0,
            }),
        }
    }

    /// View currently presented.
    pub fn view(&self) -> ViewState {
        self.lock().view
    }

    /// Status of the most recent submission attempt.
    pub fn status(&self) -> RequestStatus {
        self.lock().status.clone()
    }

    /// Snapshot of the raw form fields.
    pub fn fields(&self) -> FormFields {
        self.lock().fields.clone()
    }

    /// Strength of the current password field, recomputed on every call.
    pub fn password_strength(&self) -> PasswordStrength {
        password::score(&self.lock().fields.password)
    }

    // Field setters track keystrokes. None of them touches the submission
    // status; clearing messages is a view-switch rule only.

    pub fn set_email(&self, value: String) {
        self.lock().fields.email = value;
    }

    pub fn set_password(&self, value: String) {
        self.lock().fields.password = value;
    }

    pub fn set_confirm_password(&self, value: String) {
        self.lock().fields.confirm_password = value;
    }

    pub fn set_first_name(&self, value: String) {
        self.lock().fields.first_name = value;
    }

    pub fn set_last_name(&self, value: String) {
        self.lock().fields.last_name = value;
    }

    pub fn set_phone(&self, value: String) {
        self.lock().fields.phone = value;
    }

    /// Toggle between the login and signup views.
    ///
    /// Clears any success or failure message (the only transition that
    /// does) and supersedes a submission still in flight: its response
    /// will be discarded when it arrives.
    pub fn switch_view(&self) {
        let mut state = self.lock();
        state.view = state.view.toggled();
        state.status = RequestStatus::Idle;
        state.generation += 1;
    }

    /// Submit the login form.
    ///
    /// Accepted only in the login view, and never while another submission
    /// is pending; a refused submission returns the current status
    /// untouched. An accepted one moves the flow to `Pending`, asks the
    /// provider to sign in, and resolves to `Succeeded` or `Failed` unless
    /// the attempt was superseded in the meantime.
    pub async fn submit_login(&self) -> RequestStatus {
        let (generation, fields) = {
            let mut state = self.lock();

            if state.view != ViewState::Login || state.status.is_pending() {
                return state.status.clone();
            }

            state.begin_attempt()
        };

        let outcome = self
            .provider
            .sign_in(&fields.email, &fields.password)
            .await
            .map(|()| LOGIN_SUCCESS_MESSAGE);

        self.resolve(generation, outcome)
    }

    /// Submit the signup form.
    ///
    /// Accepted only in the signup view, and never while another
    /// submission is pending. Local checks run first and fail the attempt
    /// without any remote call or `Pending` state: the password
    /// composition rules, then the confirmation match. A passing form is
    /// submitted with the phone number duplicated into the profile
    /// metadata.
    pub async fn submit_signup(&self) -> RequestStatus {
        let (generation, fields) = {
            let mut state = self.lock();

            if state.view != ViewState::Signup || state.status.is_pending() {
                return state.status.clone();
            }

            if let Err(rule) = password::validate(&state.fields.password) {
                state.status = RequestStatus::Failed(rule.to_string());
                return state.status.clone();
            }

            if state.fields.password != state.fields.confirm_password {
                state.status = RequestStatus::Failed(PASSWORD_MISMATCH_MESSAGE.to_string());
                return state.status.clone();
            }

            state.begin_attempt()
        };

        let metadata = SignUpMetadata {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone: fields.phone.clone(),
        };

        let outcome = self
            .provider
            .sign_up(&fields.email, &fields.password, &fields.phone, metadata)
            .await
            .map(|()| SIGNUP_SUCCESS_MESSAGE);

        self.resolve(generation, outcome)
    }

    /// Apply a submission outcome unless the attempt has been superseded,
    /// then report the status the flow is left with.
    fn resolve(
        &self,
        generation: u64,
        outcome: Result<&'static str, AuthProviderError>,
    ) -> RequestStatus {
        let mut state = self.lock();

        if state.generation != generation {
            tracing::debug!(generation, "discarding response for superseded submission");
            return state.status.clone();
        }

        state.status = match outcome {
            Ok(message) => RequestStatus::Succeeded(message.to_string()),
            Err(error) => RequestStatus::Failed(error.to_string()),
        };

        state.status.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
