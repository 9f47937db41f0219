use super::{matches_query, parse_fixture, ALL_FILTER};
use shared_types::{AppError, MedicalRecord, RecordStatus};

const RECORDS: &str = include_str!("../../data/records.json");

/// Visit history, newest first.
pub fn records() -> Result<Vec<MedicalRecord>, AppError> {
    let mut records: Vec<MedicalRecord> = parse_fixture("records", RECORDS)?;
    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}

/// Status filter options: `All` then every status label.
pub fn record_status_options() -> Vec<String> {
    std::iter::once(ALL_FILTER)
        .chain(RecordStatus::ALL.iter().map(|s| s.label()))
        .map(str::to_string)
        .collect()
}

/// Search diagnosis and doctor name. `status` is a status label or `All`;
/// an unknown label matches nothing.
pub fn filter_records(records: &[MedicalRecord], query: &str, status: &str) -> Vec<MedicalRecord> {
    let wanted = RecordStatus::from_label(status);
    records
        .iter()
        .filter(|r| status == ALL_FILTER || wanted == Some(r.status))
        .filter(|r| matches_query(query, &[&r.diagnosis, &r.doctor_name]))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(records: &[MedicalRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn records_are_newest_first() {
        let records = records().unwrap();
        assert_eq!(ids(&records), ["rec_001", "rec_002", "rec_003", "rec_004"]);
        assert_eq!(records[0].date_label(), "Dec 12, 2025");
        assert!(records[3].prescription.is_empty());
    }

    #[test]
    fn search_covers_diagnosis_and_doctor() {
        let records = records().unwrap();
        assert_eq!(ids(&filter_records(&records, "vitamin", ALL_FILTER)), ["rec_003"]);
        assert_eq!(ids(&filter_records(&records, "wilson", ALL_FILTER)), ["rec_002"]);
        // department is not searched
        assert!(filter_records(&records, "laboratory", ALL_FILTER).is_empty());
    }

    #[test]
    fn status_filter_uses_labels() {
        let records = records().unwrap();
        assert_eq!(ids(&filter_records(&records, "", "Follow-up")), ["rec_002"]);
        assert_eq!(ids(&filter_records(&records, "", "Completed")), ["rec_001", "rec_003"]);
        assert_eq!(ids(&filter_records(&records, "", "Pending Results")), ["rec_004"]);
        assert!(filter_records(&records, "", "Scheduled").is_empty());
    }

    #[test]
    fn status_options_start_with_all() {
        assert_eq!(
            record_status_options(),
            ["All", "Completed", "Follow-up", "Pending Results"]
        );
    }
}
