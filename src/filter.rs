use crate::models::{FeedbackRecord, FilterCriteria};

/// Distinct clinics present in the data, for the clinic selector.
pub fn available_clinics(records: &[FeedbackRecord]) -> Vec<String> {
    let mut clinics: Vec<String> = records
        .iter()
        .map(|record| record.clinic.clone())
        .filter(|clinic| !clinic.is_empty())
        .collect();
    clinics.sort();
    clinics.dedup();
    clinics
}

/// Distinct physicians co-occurring with the selected clinic, or across
/// all records when no clinic is selected.
pub fn available_physicians(records: &[FeedbackRecord], clinic: Option<&str>) -> Vec<String> {
    let mut physicians: Vec<String> = records
        .iter()
        .filter(|record| clinic.map_or(true, |clinic| record.clinic == clinic))
        .map(|record| record.physician.clone())
        .filter(|physician| !physician.is_empty())
        .collect();
    physicians.sort();
    physicians.dedup();
    physicians
}

/// Narrows the record set by the selected clinic and physician, keeping
/// the original row order.
pub fn apply(records: &[FeedbackRecord], criteria: &FilterCriteria) -> Vec<FeedbackRecord> {
    records
        .iter()
        .filter(|record| {
            criteria
                .clinic
                .as_deref()
                .map_or(true, |clinic| record.clinic == clinic)
                && criteria
                    .physician
                    .as_deref()
                    .map_or(true, |physician| record.physician == physician)
        })
        .cloned()
        .collect()
}
