use super::{matches_query, parse_fixture, ALL_FILTER};
use shared_types::{AppError, Doctor, TimeSlot};

const DOCTORS: &str = include_str!("../../data/doctors.json");
const TIME_SLOTS: &str = include_str!("../../data/time_slots.json");

pub fn doctors() -> Result<Vec<Doctor>, AppError> {
    parse_fixture("doctors", DOCTORS)
}

/// Bookable slots; the same schedule applies to every doctor.
pub fn time_slots() -> Result<Vec<TimeSlot>, AppError> {
    parse_fixture("time_slots", TIME_SLOTS)
}

/// `All` followed by each distinct specialty in first-seen order.
pub fn specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut out = vec![ALL_FILTER.to_string()];
    for doctor in doctors {
        if !out.contains(&doctor.specialty) {
            out.push(doctor.specialty.clone());
        }
    }
    out
}

/// Search name, department and specialty; `specialty` of `All` keeps every doctor.
pub fn filter_doctors(doctors: &[Doctor], query: &str, specialty: &str) -> Vec<Doctor> {
    doctors
        .iter()
        .filter(|d| specialty == ALL_FILTER || d.specialty == specialty)
        .filter(|d| matches_query(query, &[&d.name, &d.department, &d.specialty]))
        .cloned()
        .collect()
}
