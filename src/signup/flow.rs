use super::draft::{sanitize_verification_code, SignupDraft};
use super::metrics::FunnelMetrics;
use super::step::Step;
use super::validation::{blocking_reason, can_proceed, inline_hint, StepHint};
use crate::account::{AccountError, AccountService};
use crate::navigation::Navigator;
use tracing::{debug, info, warn};

/// Snapshot of the wizard: where the user is and what they have entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub step: Step,
    pub draft: SignupDraft,
}

/// A discrete user action on the wizard.
///
/// Field setters only take effect on the step that collects the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupAction {
    SetUniversity(String),
    SetEmail(String),
    SetFirstName(String),
    SetLastName(String),
    SetPassword(String),
    SetConfirmPassword(String),
    /// Raw input; stored sanitized
    SetVerificationCode(String),
    /// Move to the next step if the current one is complete
    Proceed,
    Back,
}

impl SignupAction {
    /// The step whose field this action edits, `None` for navigation.
    pub fn field_step(&self) -> Option<Step> {
        match self {
            SignupAction::SetUniversity(_) => Some(Step::University),
            SignupAction::SetEmail(_) => Some(Step::Email),
            SignupAction::SetFirstName(_) | SignupAction::SetLastName(_) => Some(Step::Name),
            SignupAction::SetPassword(_) | SignupAction::SetConfirmPassword(_) => {
                Some(Step::Password)
            }
            SignupAction::SetVerificationCode(_) => Some(Step::Verification),
            SignupAction::Proceed | SignupAction::Back => None,
        }
    }
}

/// Apply one action to the wizard state.
///
/// `Proceed` is ignored while the current step is incomplete, and at the
/// verification step, where `SignupFlow::submit` ends the flow instead.
/// Setters for fields of another step leave the state unchanged.
pub fn reduce(state: SignupState, action: SignupAction) -> SignupState {
    if action.field_step().is_some_and(|owner| owner != state.step) {
        return state;
    }

    let SignupState { step, draft } = state;

    match action {
        SignupAction::SetUniversity(university) => SignupState {
            step,
            draft: SignupDraft { university, ..draft },
        },
        SignupAction::SetEmail(email) => SignupState {
            step,
            draft: SignupDraft { email, ..draft },
        },
        SignupAction::SetFirstName(first_name) => SignupState {
            step,
            draft: SignupDraft { first_name, ..draft },
        },
        SignupAction::SetLastName(last_name) => SignupState {
            step,
            draft: SignupDraft { last_name, ..draft },
        },
        SignupAction::SetPassword(password) => SignupState {
            step,
            draft: SignupDraft { password, ..draft },
        },
        SignupAction::SetConfirmPassword(confirm_password) => SignupState {
            step,
            draft: SignupDraft {
                confirm_password,
                ..draft
            },
        },
        SignupAction::SetVerificationCode(raw) => SignupState {
            step,
            draft: SignupDraft {
                verification_code: sanitize_verification_code(&raw),
                ..draft
            },
        },
        SignupAction::Proceed if !step.is_last() && can_proceed(step, &draft) => SignupState {
            step: step.advance(),
            draft,
        },
        SignupAction::Proceed => SignupState { step, draft },
        SignupAction::Back => SignupState {
            step: step.retreat(),
            draft,
        },
    }
}

/// Errors from the terminal actions of the flow.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("step '{0}' is not complete")]
    ValidationFailure(Step),

    #[error("cannot submit from step '{0}'")]
    NotAtFinalStep(Step),

    #[error("signup was already submitted")]
    AlreadyCompleted,

    #[error(transparent)]
    AccountCreation(#[from] AccountError),
}

/// One traversal of the signup wizard.
pub struct SignupFlow {
    state: SignupState,
    completed: bool,
    metrics: &'static FunnelMetrics,
}

impl SignupFlow {
    pub fn new() -> Self {
        Self::with_metrics(FunnelMetrics::global())
    }

    pub fn with_metrics(metrics: &'static FunnelMetrics) -> Self {
        metrics.record_step_reached(Step::FIRST);
        Self {
            state: SignupState::default(),
            completed: false,
            metrics,
        }
    }

    pub fn state(&self) -> &SignupState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.state.draft
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn can_proceed(&self) -> bool {
        can_proceed(self.state.step, &self.state.draft)
    }

    pub fn blocking_reason(&self) -> Option<StepHint> {
        blocking_reason(self.state.step, &self.state.draft)
    }

    pub fn inline_hint(&self) -> Option<StepHint> {
        inline_hint(self.state.step, &self.state.draft)
    }

    /// Apply a user action. Returns `true` if the current step changed.
    ///
    /// Actions after a successful submit are ignored.
    pub fn dispatch(&mut self, action: SignupAction) -> bool {
        if self.completed {
            debug!("Ignoring action on a completed signup");
            return false;
        }

        let from = self.state.step;
        self.state = reduce(std::mem::take(&mut self.state), action);
        let to = self.state.step;

        if to == from {
            return false;
        }

        debug!("Signup step {} -> {}", from, to);
        if to > from {
            self.metrics.record_step_reached(to);
        }
        true
    }

    /// Ask the account service to email a verification code to the draft's
    /// address. Only valid on the verification step.
    pub async fn request_verification_code(
        &self,
        service: &dyn AccountService,
    ) -> Result<(), SignupError> {
        if self.completed {
            return Err(SignupError::AlreadyCompleted);
        }
        if self.state.step != Step::Verification {
            return Err(SignupError::NotAtFinalStep(self.state.step));
        }

        service
            .send_verification_code(&self.state.draft.email)
            .await
            .map_err(SignupError::from)
    }

    /// Hand the completed draft to the account service and leave the flow.
    ///
    /// On failure the flow stays on the verification step with the draft
    /// intact, so the caller can offer a retry.
    pub async fn submit(
        &mut self,
        service: &dyn AccountService,
        navigator: &dyn Navigator,
    ) -> Result<(), SignupError> {
        if self.completed {
            return Err(SignupError::AlreadyCompleted);
        }

        let step = self.state.step;
        if step != Step::Verification {
            return Err(SignupError::NotAtFinalStep(step));
        }
        if !self.can_proceed() {
            return Err(SignupError::ValidationFailure(step));
        }

        self.metrics.record_submission();
        if let Err(e) = service.create_account(&self.state.draft).await {
            self.metrics.record_submission_failure();
            warn!("Account creation failed: {}", e);
            return Err(e.into());
        }

        self.completed = true;
        info!("Signup completed for {}", self.state.draft.email);
        navigator.leave_signup();
        Ok(())
    }
}

impl Default for SignupFlow {
    fn default() -> Self {
        Self::new()
    }
}
