use super::{clinic_users, doctors, records};
use shared_types::{AdminSummary, AppError, RecordStatus, Role};

/// Visits today are not tracked by any fixture.
const VISITS_TODAY: usize = 14;

/// Headline counts for the admin dashboard.
pub fn admin_summary() -> Result<AdminSummary, AppError> {
    let users = clinic_users()?;
    let records = records()?;
    Ok(AdminSummary {
        total_staff: users.iter().filter(|u| u.role == Role::Staff).count(),
        active_doctors: doctors()?.len(),
        pending_follow_ups: records
            .iter()
            .filter(|r| r.status == RecordStatus::FollowUp)
            .count(),
        total_patients: records.len(),
        visits_today: VISITS_TODAY,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTone {
    Success,
    Info,
    Warning,
}

impl ActivityTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityTone::Success => "success",
            ActivityTone::Info => "info",
            ActivityTone::Warning => "warning",
        }
    }
}

/// One line of the admin activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub time: &'static str,
    pub text: &'static str,
    pub meta: &'static str,
    pub tone: ActivityTone,
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            time: "10:42 AM",
            text: "Dr. Sarah Smith completed a consultation record.",
            meta: "Record ID: REC-009 • General Medicine",
            tone: ActivityTone::Success,
        },
        Activity {
            time: "09:15 AM",
            text: "New user Abebe Kebede registered via portal.",
            meta: "Student ID: BDU150221",
            tone: ActivityTone::Info,
        },
        Activity {
            time: "08:30 AM",
            text: "System Admin updated clinic operating hours.",
            meta: "Configuration Change",
            tone: ActivityTone::Info,
        },
        Activity {
            time: "Yesterday",
            text: "Dr. Alemayehu marked 3 appointments as 'No Show'.",
            meta: "Follow-up required",
            tone: ActivityTone::Warning,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_counts_fixtures() {
        assert_eq!(
            admin_summary().unwrap(),
            AdminSummary {
                total_staff: 3,
                active_doctors: 4,
                pending_follow_ups: 1,
                total_patients: 4,
                visits_today: 14,
            }
        );
    }

    #[test]
    fn activity_feed_is_newest_first() {
        let feed = recent_activity();
        assert_eq!(feed.len(), 4);
        assert_eq!(feed.last().map(|a| a.time), Some("Yesterday"));
    }
}
