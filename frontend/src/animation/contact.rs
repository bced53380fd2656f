use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Submitting,
    Submitted,
}

pub enum ContactAction {
    SetEmail(String),
    Focus,
    Blur,
    Submit,
    Delivered,
    Failed(String),
    Reset,
}

/// Newsletter style contact form: one email field and a submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub phase: ContactPhase,
    pub focused: bool,
    pub error: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            phase: ContactPhase::Idle,
            focused: false,
            error: None,
        }
    }
}

impl ContactForm {
    /// Input and button are frozen while a message is in flight or being
    /// acknowledged.
    pub fn is_locked(&self) -> bool {
        self.phase != ContactPhase::Idle
    }

    pub fn can_submit(&self) -> bool {
        !self.is_locked() && !self.email.trim().is_empty()
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::SetEmail(_) if self.is_locked() => return self,
            ContactAction::SetEmail(email) => {
                next.email = email;
                next.error = None;
            }
            ContactAction::Focus => next.focused = true,
            ContactAction::Blur => next.focused = false,
            ContactAction::Submit if !self.can_submit() => return self,
            ContactAction::Submit => {
                next.phase = ContactPhase::Submitting;
                next.error = None;
            }
            ContactAction::Delivered if self.phase == ContactPhase::Submitting => {
                next.phase = ContactPhase::Submitted;
                next.email.clear();
            }
            ContactAction::Failed(message) if self.phase == ContactPhase::Submitting => {
                next.phase = ContactPhase::Idle;
                next.error = Some(message);
            }
            ContactAction::Reset if self.phase == ContactPhase::Submitted => {
                next.phase = ContactPhase::Idle;
            }
            ContactAction::Delivered | ContactAction::Failed(_) | ContactAction::Reset => {
                return self
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(email: &str) -> Rc<ContactForm> {
        Rc::new(ContactForm::default()).reduce(ContactAction::SetEmail(email.to_string()))
    }

    #[test]
    fn submit_requires_an_email() {
        let state = typed("   ").reduce(ContactAction::Submit);
        assert_eq!(state.phase, ContactPhase::Idle);
    }

    /// Timeline driven by the section: delivery after the round trip,
    /// reset after the success hold.
    #[test]
    fn submission_timeline() {
        let round_trip_ms = 1_500;
        let hold_ms = 3_000;
        let timeline: Vec<(u32, ContactAction)> = vec![
            (0, ContactAction::Submit),
            (round_trip_ms, ContactAction::Delivered),
            (round_trip_ms + hold_ms, ContactAction::Reset),
        ];

        let mut state = typed("hello@example.com");
        let mut observed = Vec::new();
        for (at, action) in timeline {
            state = state.reduce(action);
            observed.push((at, state.phase, state.email.clone()));
        }

        assert_eq!(
            observed,
            vec![
                (0, ContactPhase::Submitting, "hello@example.com".to_string()),
                (1_500, ContactPhase::Submitted, String::new()),
                (4_500, ContactPhase::Idle, String::new()),
            ]
        );
    }

    #[test]
    fn locked_form_ignores_input_and_resubmits() {
        let state = typed("a@b.c").reduce(ContactAction::Submit);
        let after = Rc::clone(&state)
            .reduce(ContactAction::SetEmail("x@y.z".into()))
            .reduce(ContactAction::Submit);
        assert_eq!(after.email, "a@b.c");
        assert_eq!(after.phase, ContactPhase::Submitting);
    }

    #[test]
    fn failure_keeps_email_and_reports() {
        let state = typed("a@b.c")
            .reduce(ContactAction::Submit)
            .reduce(ContactAction::Failed("offline".into()));
        assert_eq!(state.phase, ContactPhase::Idle);
        assert_eq!(state.email, "a@b.c");
        assert_eq!(state.error.as_deref(), Some("offline"));
    }

    #[test]
    fn stray_timer_actions_are_ignored() {
        let state = typed("a@b.c");
        let after = Rc::clone(&state).reduce(ContactAction::Reset).reduce(ContactAction::Delivered);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn focus_tracking() {
        let state = Rc::new(ContactForm::default()).reduce(ContactAction::Focus);
        assert!(state.focused);
        assert!(!state.reduce(ContactAction::Blur).focused);
    }
}
