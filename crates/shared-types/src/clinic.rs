//! Clinic records served by the mock data services.

use crate::{AppError, Role};
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Display format for record and article dates, e.g. `Dec 12, 2025`.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub department: String,
    pub image: String,
    pub experience_years: u8,
    pub rating: f32,
    pub available_days: Vec<Weekday>,
    pub available_today: bool,
}

impl Doctor {
    pub fn available_days_label(&self) -> String {
        self.available_days
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub time: NaiveTime,
    pub available: bool,
}

impl TimeSlot {
    /// `09:00 AM` style label.
    pub fn label(&self) -> String {
        self.time.format("%I:%M %p").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    Completed,
    FollowUp,
    PendingResults,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Completed,
        RecordStatus::FollowUp,
        RecordStatus::PendingResults,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Completed => "Completed",
            RecordStatus::FollowUp => "Follow-up",
            RecordStatus::PendingResults => "Pending Results",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitType {
    Emergency,
    Checkup,
    Consultation,
}

impl VisitType {
    pub fn label(&self) -> &'static str {
        match self {
            VisitType::Emergency => "Emergency",
            VisitType::Checkup => "Checkup",
            VisitType::Consultation => "Consultation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub date: NaiveDate,
    pub doctor_name: String,
    pub doctor_role: String,
    pub department: String,
    pub diagnosis: String,
    pub visit_type: VisitType,
    pub status: RecordStatus,
    pub prescription: Vec<String>,
    pub notes: String,
}

impl MedicalRecord {
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleCategory {
    MentalHealth,
    Nutrition,
    Fitness,
    CampusLife,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 4] = [
        ArticleCategory::MentalHealth,
        ArticleCategory::Nutrition,
        ArticleCategory::Fitness,
        ArticleCategory::CampusLife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArticleCategory::MentalHealth => "Mental Health",
            ArticleCategory::Nutrition => "Nutrition",
            ArticleCategory::Fitness => "Fitness",
            ArticleCategory::CampusLife => "Campus Life",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: ArticleCategory,
    pub author: String,
    pub date: NaiveDate,
    pub read_minutes: u8,
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

/// Directory entry shown on the staff management page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicUser {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub department: String,
    pub email: String,
    pub active: bool,
}

/// A help-desk ticket accepted by the support form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: Uuid,
    pub subject: String,
    pub details: String,
}

impl SupportTicket {
    /// Both fields are required after trimming.
    pub fn new(subject: &str, details: &str) -> Result<Self, AppError> {
        let mut field_errors = HashMap::new();
        if subject.trim().is_empty() {
            field_errors.insert("subject".to_string(), "Subject is required".to_string());
        }
        if details.trim().is_empty() {
            field_errors.insert("details".to_string(), "Please describe the issue".to_string());
        }
        if !field_errors.is_empty() {
            return Err(AppError::validation("Please fill in all fields", field_errors));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            subject: subject.trim().to_string(),
            details: details.trim().to_string(),
        })
    }
}

/// Headline counts on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub total_staff: usize,
    pub active_doctors: usize,
    pub pending_follow_ups: usize,
    pub total_patients: usize,
    pub visits_today: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    #[test]
    fn record_status_labels_roundtrip() {
        for status in RecordStatus::ALL {
            assert_eq!(RecordStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(RecordStatus::from_label("All"), None);
    }

    #[test]
    fn category_labels_roundtrip() {
        for category in ArticleCategory::ALL {
            assert_eq!(ArticleCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn slot_label_is_twelve_hour() {
        let slot = TimeSlot {
            id: "s4".into(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            available: true,
        };
        assert_eq!(slot.label(), "02:00 PM");
    }

    #[test]
    fn date_label_format() {
        let record = MedicalRecord {
            id: "rec".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            doctor_name: String::new(),
            doctor_role: String::new(),
            department: String::new(),
            diagnosis: String::new(),
            visit_type: VisitType::Checkup,
            status: RecordStatus::PendingResults,
            prescription: vec![],
            notes: String::new(),
        };
        assert_eq!(record.date_label(), "Sep 10, 2025");
    }

    #[test]
    fn ticket_requires_both_fields() {
        let err = SupportTicket::new("  ", "").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("subject"));
        assert!(err.field_errors.contains_key("details"));

        let ticket = SupportTicket::new(" Portal login ", "Cannot see records").unwrap();
        assert_eq!(ticket.subject, "Portal login");
    }
}
