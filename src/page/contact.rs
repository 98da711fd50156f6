//! Contact form validation and submit feedback
//!
//! There is no backend: an accepted message is written to the log.

use std::fmt;

use super::{
    easing::Ease,
    tween::{Pose, PoseTween, Tween},
};

const PRESS: Tween = Tween {
    delay: 0.0,
    duration: 0.15,
    ease: Ease::Power2In,
};
const POP_IN: Tween = Tween {
    delay: 0.0,
    duration: 0.6,
    ease: Ease::BackOut(1.4),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(Field::Name) => f.write_str("Please enter your name"),
            FieldError::Required(Field::Email) => f.write_str("Please enter your email"),
            FieldError::Required(Field::Message) => f.write_str("Please write a message"),
            FieldError::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

/// `local@domain` with no whitespace and non-empty halves
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing { errors: Vec<FieldError> },
    /// Submit button press animation before the success state
    Pressing { started: f32 },
    Sent { started: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            state: FormState::Editing { errors: Vec::new() },
        }
    }
}

impl ContactForm {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.state, FormState::Sent { .. })
    }

    pub fn errors(&self) -> &[FieldError] {
        match &self.state {
            FormState::Editing { errors } => errors,
            _ => &[],
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::Required(Field::Message));
        }
        errors
    }

    /// Validates and starts the press animation; invalid forms stay editable
    /// with their errors listed
    pub fn submit(&mut self, time: f32) -> bool {
        if !matches!(self.state, FormState::Editing { .. }) {
            return false;
        }
        let errors = self.validate();
        if errors.is_empty() {
            self.state = FormState::Pressing { started: time };
            true
        } else {
            self.state = FormState::Editing { errors };
            false
        }
    }

    pub fn update(&mut self, time: f32) {
        if let FormState::Pressing { started } = self.state {
            if PRESS.is_finished(time - started) {
                log::info!(
                    "Contact message from {} <{}>: {}",
                    self.name.trim(),
                    self.email.trim(),
                    self.message.trim()
                );
                self.state = FormState::Sent { started: time };
            }
        }
    }

    /// Transform of the form panel
    pub fn pose(&self, time: f32) -> Pose {
        match self.state {
            FormState::Editing { .. } => Pose::default(),
            FormState::Pressing { started } => {
                PoseTween::new(Pose::default(), Pose::default().with_scale(0.98), PRESS)
                    .sample(time - started)
            }
            FormState::Sent { started } => {
                PoseTween::new(Pose::hidden().with_scale(0.95), Pose::default(), POP_IN)
                    .sample(time - started)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("jane@studio.pk"));
        assert!(!is_valid_email("jane studio@x"));
        assert!(!is_valid_email("@studio"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn invalid_submit_lists_every_problem() {
        let mut form = ContactForm {
            email: "nope".into(),
            ..Default::default()
        };
        assert!(!form.submit(0.0));
        assert_eq!(
            form.errors(),
            &[
                FieldError::Required(Field::Name),
                FieldError::InvalidEmail,
                FieldError::Required(Field::Message)
            ]
        );
    }

    #[test]
    fn valid_submit_presses_then_pops_in() {
        let mut form = ContactForm {
            name: "Jane".into(),
            email: "jane@studio.pk".into(),
            message: "A villa render".into(),
            ..Default::default()
        };
        assert!(form.submit(1.0));
        assert!(form.pose(1.1).scale < 1.0);
        form.update(1.1);
        assert!(!form.is_sent());
        form.update(1.2);
        assert!(form.is_sent());
        assert!(form.pose(1.2).opacity.abs() < 1e-5);
        assert_eq!(form.pose(2.0), Pose::default());
        assert!(!form.submit(2.0));
    }
}
