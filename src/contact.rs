//! Placeholder contact form handling.
//!
//! Validation only: a valid submission produces a thank-you notice and a
//! form reset. Nothing is ever sent over the network.

pub const INCOMPLETE_NOTICE: &str = "Please complete all fields before sending.";

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the page should do after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the notice and leave the form as is.
    Rejected { notice: &'static str },
    /// Show the notice and reset the form.
    Accepted { notice: String },
}

impl SubmitOutcome {
    pub fn notice(&self) -> &str {
        match self {
            Self::Rejected { notice } => *notice,
            Self::Accepted { notice } => notice.as_str(),
        }
    }

    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    pub fn submit(&self) -> SubmitOutcome {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return SubmitOutcome::Rejected { notice: INCOMPLETE_NOTICE };
        }
        SubmitOutcome::Accepted {
            notice: format!("Thank you, {name}! Your message has been recorded (placeholder)."),
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
