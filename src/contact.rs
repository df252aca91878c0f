//! Lead capture: the proposal request form and meeting scheduling.
//!
//! Forms are validated and turned into the payload handed to the mail
//! provider. Delivery itself happens outside this crate.

use crate::error::ContactError;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("valid regex"));

pub const SERVICES: [&str; 10] = [
    "Business Plan Writing",
    "Pitch Deck Creation",
    "Financial Modelling",
    "Market Research & Feasibility",
    "Startup Consulting",
    "Recruitment & HR Support",
    "Construction Cost Estimation",
    "Material & Labor Estimation",
    "Budget Forecasting & Affordability",
    "Feasibility Analysis for Projects",
];

const NO_QUOTE: &str = "No quote details";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: Option<String>,
    pub message: String,
    quote: Option<Value>,
}

impl ContactForm {
    /// Attaches quote details (typically an estimate) to the message.
    pub fn attach_quote<T: Serialize>(&mut self, quote: &T) -> Result<(), serde_json::Error> {
        self.quote = Some(serde_json::to_value(quote)?);
        Ok(())
    }

    #[must_use]
    pub fn quote(&self) -> Option<&Value> {
        self.quote.as_ref()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Required("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::Required("email"));
        }
        if !EMAIL.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if let Some(service) = &self.service {
            if !SERVICES.contains(&service.as_str()) {
                return Err(ContactError::UnknownService(service.clone()));
            }
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Required("message"));
        }
        Ok(())
    }

    /// Validates and builds the outbound message: the form fields plus
    /// `quoteDetails`, the pretty-printed quote or a placeholder.
    pub fn payload(&self) -> Result<Value, ContactError> {
        self.validate()?;

        let quote_details = self
            .quote
            .as_ref()
            .and_then(|q| serde_json::to_string_pretty(q).ok())
            .unwrap_or_else(|| NO_QUOTE.to_string());

        let mut fields = Map::new();
        fields.insert("name".into(), json!(self.name.trim()));
        fields.insert("email".into(), json!(self.email.trim()));
        fields.insert("company".into(), json!(self.company.trim()));
        fields.insert(
            "service".into(),
            json!(self.service.as_deref().unwrap_or_default()),
        );
        fields.insert("message".into(), json!(self.message.trim()));
        fields.insert("quoteDetails".into(), json!(quote_details));
        Ok(Value::Object(fields))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeSlot {
    #[serde(rename = "10AM - 11AM")]
    Morning,
    #[serde(rename = "12PM - 1PM")]
    Noon,
    #[serde(rename = "3PM - 4PM")]
    Afternoon,
    #[serde(rename = "6PM - 7PM")]
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Noon,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "10AM - 11AM",
            TimeSlot::Noon => "12PM - 1PM",
            TimeSlot::Afternoon => "3PM - 4PM",
            TimeSlot::Evening => "6PM - 7PM",
        }
    }

    fn parse(text: &str) -> Option<TimeSlot> {
        let wanted: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        TimeSlot::ALL.into_iter().find(|slot| {
            let label: String = slot.label().chars().filter(|c| !c.is_whitespace()).collect();
            label.eq_ignore_ascii_case(&wanted)
        })
    }
}

/// Raw meeting form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingForm {
    pub name: String,
    pub date: String,
    pub slot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    pub name: String,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

impl MeetingForm {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.date.trim().is_empty() && self.slot.trim().is_empty()
    }

    /// All three fields are required.
    pub fn validate(&self) -> Result<Meeting, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::Required("name"));
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ContactError::Required("date"));
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ContactError::InvalidDate(date.to_string()))?;
        if self.slot.trim().is_empty() {
            return Err(ContactError::Required("time"));
        }
        let slot =
            TimeSlot::parse(&self.slot).ok_or_else(|| ContactError::UnknownSlot(self.slot.clone()))?;

        Ok(Meeting {
            name: name.to_string(),
            date,
            slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Please send a proposal".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn requires_name_email_and_message() {
        let mut form = filled();
        form.name = "  ".into();
        assert_eq!(form.validate(), Err(ContactError::Required("name")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactError::Required("message")));

        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut form = filled();
        form.email = "ada at example".into();
        assert_eq!(
            form.validate(),
            Err(ContactError::InvalidEmail("ada at example".into()))
        );
        form.email = "@example.com".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn service_must_come_from_catalog() {
        let mut form = filled();
        form.service = Some("Startup Consulting".into());
        assert_eq!(form.validate(), Ok(()));
        form.service = Some("Dog Walking".into());
        assert_eq!(
            form.validate(),
            Err(ContactError::UnknownService("Dog Walking".into()))
        );
    }

    #[test]
    fn payload_without_quote_uses_placeholder() {
        let payload = filled().payload().unwrap();
        assert_eq!(payload["quoteDetails"], "No quote details");
        assert_eq!(payload["service"], "");
    }

    #[test]
    fn payload_embeds_pretty_quote() {
        let mut form = filled();
        form.attach_quote(&json!({"totalCost": 98500})).unwrap();
        let payload = form.payload().unwrap();
        assert_eq!(payload["quoteDetails"], "{\n  \"totalCost\": 98500\n}");
    }

    #[test]
    fn meeting_requires_all_fields() {
        let form = MeetingForm {
            name: "Ada".into(),
            date: "2026-11-02".into(),
            slot: String::new(),
        };
        assert_eq!(form.validate(), Err(ContactError::Required("time")));
    }

    #[test]
    fn meeting_parses_date_and_slot() {
        let form = MeetingForm {
            name: "Ada".into(),
            date: "2026-11-02".into(),
            slot: "3 pm - 4 pm".into(),
        };
        let meeting = form.validate().unwrap();
        assert_eq!(meeting.slot, TimeSlot::Afternoon);
        assert_eq!(meeting.date, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap());

        let bad = MeetingForm {
            date: "02/11/2026".into(),
            ..form
        };
        assert_eq!(
            bad.validate(),
            Err(ContactError::InvalidDate("02/11/2026".into()))
        );
    }
}
