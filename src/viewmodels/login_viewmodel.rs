// ============================================================================
// LOGIN VIEWMODEL - validate, check credentials, open the session
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::error::{AuthError, ValidationError};
use crate::models::{LoginForm, Session};
use crate::services::{validate_login, Authenticator};
use crate::state::{LoadTicket, MountFlag, NotificationCenter, ReactiveState, SessionContext};

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    SignedIn(Session),
    Invalid(ValidationError),
    Rejected,
    /// Already submitting, or the view went away mid-flight
    Ignored,
}

#[derive(Clone)]
pub struct LoginViewModel {
    session: SessionContext,
    authenticator: Rc<dyn Authenticator>,
    notifications: NotificationCenter,
    mount: MountFlag,
    form: Rc<RefCell<LoginForm>>,
    submitting: ReactiveState<bool>,
    error: ReactiveState<Option<ValidationError>>,
}

impl LoginViewModel {
    pub fn new(
        session: SessionContext,
        authenticator: Rc<dyn Authenticator>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            session,
            authenticator,
            notifications,
            mount: MountFlag::new(),
            form: Rc::new(RefCell::new(LoginForm::default())),
            submitting: ReactiveState::new(false),
            error: ReactiveState::new(None),
        }
    }

    pub fn form(&self) -> LoginForm {
        self.form.borrow().clone()
    }

    pub fn set_email(&self, email: &str) {
        self.form.borrow_mut().email = email.to_string();
    }

    pub fn set_password(&self, password: &str) {
        self.form.borrow_mut().password = password.to_string();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Inline field error from the last submit
    pub fn error(&self) -> Option<ValidationError> {
        self.error.get()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        let callback = Rc::new(callback);
        {
            let callback = callback.clone();
            self.submitting.subscribe(move || callback());
        }
        self.error.subscribe(move || callback());
    }

    pub fn dismount(&self) {
        self.mount.dismount();
    }

    /// Local checks. On success the view is marked as submitting.
    pub fn begin_submit(&self) -> Result<(LoadTicket, LoginForm), LoginOutcome> {
        if self.submitting.get() {
            return Err(LoginOutcome::Ignored);
        }
        let form = self.form();
        if let Err(e) = validate_login(&form) {
            self.error.set(Some(e.clone()));
            return Err(LoginOutcome::Invalid(e));
        }
        self.error.set(None);
        self.submitting.set(true);
        Ok((self.mount.ticket(), form))
    }

    /// Credential check. The session is touched only on success.
    pub fn finish_submit(&self, ticket: &LoadTicket, form: &LoginForm) -> LoginOutcome {
        if !ticket.is_live() {
            log::debug!("🗑️ [LOGIN] view dismounted before the credential check");
            return LoginOutcome::Ignored;
        }
        self.submitting.set(false);

        match self.authenticator.authenticate(&form.email, &form.password) {
            Ok(token) => {
                let session = self.session.sign_in(&form.email, &token);
                self.notifications.success("Login successful!");
                LoginOutcome::SignedIn(session)
            }
            Err(AuthError::Validation(e)) => {
                self.error.set(Some(e.clone()));
                LoginOutcome::Invalid(e)
            }
            Err(AuthError::InvalidCredentials) => {
                self.notifications.error("Invalid email or password");
                LoginOutcome::Rejected
            }
        }
    }

    /// Full submit. `delay` stands in for the round-trip of a real backend.
    pub async fn submit<D>(&self, delay: D) -> LoginOutcome
    where
        D: Future<Output = ()>,
    {
        let (ticket, form) = match self.begin_submit() {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };
        log::info!("🔐 [LOGIN] signing in {}", form.email);
        delay.await;
        self.finish_submit(&ticket, &form)
    }
}
