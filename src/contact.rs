//! Contact form - validation, phone formatting, WhatsApp handoff
//!
//! There is no server; a valid submission becomes a prefilled `wa.me` link
//! the visitor opens themselves.

use serde::{Deserialize, Serialize};

/// Studio WhatsApp contact.
pub const WHATSAPP_NUMBER: &str = "+91 8888234987";

pub const MESSAGE_MAX_LEN: usize = 500;
pub const MESSAGE_MIN_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// Draft/submission payload. Serializable so the in-progress draft can be
/// parked in local storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Submission {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let mut labels = domain.split('.');
    labels.next().is_some_and(|l| !l.is_empty())
        && domain.contains('.')
        && !domain.ends_with('.')
}

fn is_formatted_phone(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == 3
        && parts[0].len() == 3
        && parts[1].len() == 3
        && parts[2].len() == 4
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}

/// Validate a single field, returning the user-facing message on failure.
pub fn validate(field: Field, value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    match field {
        Field::Name => {
            if value.is_empty() {
                Err("Name is required")
            } else if value.chars().count() < 2 {
                Err("Name must be at least 2 characters")
            } else {
                Ok(())
            }
        }
        Field::Email => {
            if value.is_empty() {
                Err("Email is required")
            } else if !is_email_shaped(value) {
                Err("Please enter a valid email address")
            } else {
                Ok(())
            }
        }
        Field::Phone => {
            if value.is_empty() {
                Err("Phone number is required")
            } else if !is_formatted_phone(value) {
                Err("Please enter a valid phone number (XXX-XXX-XXXX)")
            } else {
                Ok(())
            }
        }
        Field::Message => {
            if value.is_empty() {
                Err("Message is required")
            } else if value.chars().count() < MESSAGE_MIN_LEN {
                Err("Message must be at least 10 characters")
            } else if value.chars().count() > MESSAGE_MAX_LEN {
                Err("Message must be less than 500 characters")
            } else {
                Ok(())
            }
        }
    }
}

/// Validate every field; failures keep the form's field order.
pub fn validate_all(submission: &Submission) -> Vec<(Field, &'static str)> {
    [Field::Name, Field::Email, Field::Phone, Field::Message]
        .into_iter()
        .filter_map(|f| validate(f, submission.field(f)).err().map(|msg| (f, msg)))
        .collect()
}

/// Normalize raw phone input: digits only, capped at 10, formatted as
/// XXX-XXX-XXXX once all 10 digits are present.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect();
    if digits.len() == 10 {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits
    }
}

pub fn characters_remaining(message: &str) -> isize {
    MESSAGE_MAX_LEN as isize - message.chars().count() as isize
}

/// The prefilled message sent to the studio.
pub fn whatsapp_message(submission: &Submission) -> String {
    format!(
        "Hello, I'm interested in photography services. My details are:\n\
         \u{2022} Name: {}\n\
         \u{2022} Email: {}\n\
         \u{2022} Phone: {}\n\
         \u{2022} Message: {}",
        submission.name.trim(),
        submission.email.trim(),
        submission.phone.trim(),
        submission.message.trim(),
    )
}

/// `https://wa.me/<digits>?text=<urlencoded message>`
pub fn whatsapp_url(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> Submission {
        Submission {
            name: "Asha Mehta".into(),
            email: "asha@example.com".into(),
            phone: "987-654-3210".into(),
            message: "I'd like to book a wedding shoot in March.".into(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(validate_all(&valid_submission()).is_empty());
    }

    #[test]
    fn name_rules() {
        assert_eq!(validate(Field::Name, ""), Err("Name is required"));
        assert_eq!(validate(Field::Name, "  "), Err("Name is required"));
        assert_eq!(validate(Field::Name, "A"), Err("Name must be at least 2 characters"));
        assert!(validate(Field::Name, "Al").is_ok());
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate(Field::Email, ""), Err("Email is required"));
        for bad in ["no-at.example.com", "two@@example.com", "a@b", "a @b.com", "a@b.com.", "@b.com"] {
            assert!(validate(Field::Email, bad).is_err(), "{bad} accepted");
        }
        assert!(validate(Field::Email, "studio@vintage-moments.in").is_ok());
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate(Field::Phone, ""), Err("Phone number is required"));
        assert!(validate(Field::Phone, "9876543210").is_err());
        assert!(validate(Field::Phone, "98-7654-3210").is_err());
        assert!(validate(Field::Phone, "987-654-3210").is_ok());
    }

    #[test]
    fn message_rules() {
        assert_eq!(validate(Field::Message, ""), Err("Message is required"));
        assert!(validate(Field::Message, "too short").is_err());
        assert!(validate(Field::Message, &"x".repeat(501)).is_err());
        assert!(validate(Field::Message, &"x".repeat(500)).is_ok());
    }

    #[test]
    fn validate_all_reports_in_field_order() {
        let errors = validate_all(&Submission::default());
        let fields: Vec<Field> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Phone, Field::Message]);
    }

    #[test]
    fn phone_formatting_caps_and_groups() {
        assert_eq!(format_phone("987"), "987");
        assert_eq!(format_phone("987654"), "987654");
        assert_eq!(format_phone("9876543210"), "987-654-3210");
        assert_eq!(format_phone("(987) 654-3210 ext 9"), "987-654-3210");
        assert_eq!(format_phone("98765432109999"), "987-654-3210");
    }

    #[test]
    fn character_counter_counts_down() {
        assert_eq!(characters_remaining(""), 500);
        assert_eq!(characters_remaining("hello"), 495);
        assert_eq!(characters_remaining(&"x".repeat(510)), -10);
    }

    #[test]
    fn whatsapp_message_lists_details() {
        let msg = whatsapp_message(&valid_submission());
        assert!(msg.starts_with("Hello, I'm interested in photography services."));
        assert!(msg.contains("\u{2022} Name: Asha Mehta"));
        assert!(msg.contains("\u{2022} Phone: 987-654-3210"));
    }

    #[test]
    fn whatsapp_url_strips_number_and_encodes_text() {
        let url = whatsapp_url(WHATSAPP_NUMBER, "hello & welcome");
        assert!(url.starts_with("https://wa.me/918888234987?text="));
        assert!(url.contains("hello%20%26%20welcome"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn draft_round_trips_through_json() {
        let draft = valid_submission();
        let json = serde_json::to_string(&draft).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
