use std::fmt::Write;

use chrono::NaiveDate;

use crate::auth::Session;
use crate::models::{FeedbackRecord, FilterCriteria, SentimentLabels};
use crate::recommend::Recommender;
use crate::sentiment;

pub const NO_CHART_DATA: &str = "No feedback matches the current selection.";
pub const NO_POSITIVE_COMMENTS: &str = "No positive comments found.";
pub const NO_NEGATIVE_COMMENTS: &str = "No negative comments found.";

fn selection_label(criteria: &FilterCriteria) -> String {
    let clinic = criteria.clinic.as_deref().unwrap_or("all clinics");
    let physician = criteria.physician.as_deref().unwrap_or("all physicians");
    format!("{clinic}, {physician}")
}

/// Renders one dashboard snapshot for an already-filtered record set:
/// the chart data, the recommendation text, and the comment lists.
pub fn build_report(
    criteria: &FilterCriteria,
    generated: NaiveDate,
    records: &[FeedbackRecord],
    labels: &SentimentLabels,
    recommender: &dyn Recommender,
    session: &Session,
) -> String {
    let counts = sentiment::count_by_sentiment(records, labels);
    let totals = sentiment::overall_distribution(records, labels);
    let means = sentiment::mean_score_by_class(records);
    let (positive, negative) = sentiment::partition_comments(records, labels);

    let mut output = String::new();

    let _ = writeln!(output, "# Clinic Feedback Report");
    let _ = writeln!(
        output,
        "Generated {} for {}",
        generated,
        selection_label(criteria)
    );
    if let Some(user) = session.user.as_deref() {
        let _ = writeln!(output, "Prepared for {user}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Sentiment Counts by Touch Point");

    match &counts {
        None => {
            let _ = writeln!(output, "{NO_CHART_DATA}");
        }
        Some(rows) => {
            for row in rows {
                let _ = writeln!(
                    output,
                    "- {}: {} positive / {} negative",
                    row.class, row.positive, row.negative
                );
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Overall Sentiment");

    match &totals {
        None => {
            let _ = writeln!(output, "{NO_CHART_DATA}");
        }
        Some(totals) => {
            let total = totals.total() as f64;
            let _ = writeln!(
                output,
                "- positive: {} ({:.0}%)",
                totals.positive,
                100.0 * totals.positive as f64 / total
            );
            let _ = writeln!(
                output,
                "- negative: {} ({:.0}%)",
                totals.negative,
                100.0 * totals.negative as f64 / total
            );
        }
    }

    if !means.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Mean Sentiment Score by Touch Point");
        for mean in &means {
            let _ = writeln!(output, "- {}: {:+.2}", mean.class, mean.mean_score);
        }
    }

    let positive_comments: Vec<String> =
        positive.iter().map(|record| record.comment.clone()).collect();
    let negative_comments: Vec<String> =
        negative.iter().map(|record| record.comment.clone()).collect();
    let recommendation = recommender.recommend(&positive_comments, &negative_comments);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommendations");
    let _ = writeln!(output, "{}", recommendation.positive_text);
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", recommendation.negative_text);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Positive Comments");
    if positive.is_empty() {
        let _ = writeln!(output, "{NO_POSITIVE_COMMENTS}");
    } else {
        for record in &positive {
            let _ = writeln!(
                output,
                "- {} (Physician: {}, Clinic: {})",
                record.comment, record.physician, record.clinic
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Negative Comments");
    if negative.is_empty() {
        let _ = writeln!(output, "{NO_NEGATIVE_COMMENTS}");
    } else {
        for record in &negative {
            let _ = writeln!(
                output,
                "- {} (Physician: {}, Clinic: {})",
                record.comment, record.physician, record.clinic
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{TemplateRecommender, NO_NEGATIVE_TEMPLATE, POSITIVE_TEMPLATE};

    fn record(clinic: &str, class: &str, sentiment: &str, score: Option<f64>) -> FeedbackRecord {
        FeedbackRecord {
            clinic: clinic.to_string(),
            physician: "Dr. Shah".to_string(),
            comment: format!("{sentiment} note about {class}"),
            class: class.to_string(),
            sentiment: sentiment.to_string(),
            sentiment_score: score,
        }
    }

    fn generated() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    #[test]
    fn report_covers_counts_comments_and_recommendations() {
        let records = vec![
            record("Northside", "front desk", "positive", Some(0.8)),
            record("Northside", "waiting room", "negative", Some(-0.6)),
        ];
        let report = build_report(
            &FilterCriteria {
                clinic: Some("Northside".to_string()),
                physician: None,
            },
            generated(),
            &records,
            &SentimentLabels::default(),
            &TemplateRecommender,
            &Session::anonymous(),
        );

        assert!(report.contains("Generated 2026-08-06 for Northside, all physicians"));
        assert!(report.contains("- front desk: 1 positive / 0 negative"));
        assert!(report.contains("- waiting room: 0 positive / 1 negative"));
        assert!(report.contains("- positive: 1 (50%)"));
        assert!(report.contains("## Mean Sentiment Score by Touch Point"));
        assert!(report.contains("- front desk: +0.80"));
        assert!(report.contains("- waiting room: -0.60"));
        assert!(report.contains("positive note about front desk (Physician: Dr. Shah, Clinic: Northside)"));
    }

    #[test]
    fn empty_selection_uses_the_chart_and_comment_messages() {
        let report = build_report(
            &FilterCriteria::default(),
            generated(),
            &[],
            &SentimentLabels::default(),
            &TemplateRecommender,
            &Session::anonymous(),
        );

        assert!(report.contains(NO_CHART_DATA));
        assert!(report.contains(NO_POSITIVE_COMMENTS));
        assert!(report.contains(NO_NEGATIVE_COMMENTS));
        assert!(!report.contains("## Mean Sentiment Score"));
    }

    #[test]
    fn one_sided_feedback_mixes_templates() {
        let records = vec![record("Northside", "front desk", "positive", None)];
        let report = build_report(
            &FilterCriteria::default(),
            generated(),
            &records,
            &SentimentLabels::default(),
            &TemplateRecommender,
            &Session::anonymous(),
        );

        assert!(report.contains(POSITIVE_TEMPLATE));
        assert!(report.contains(NO_NEGATIVE_TEMPLATE));
        assert!(report.contains(NO_NEGATIVE_COMMENTS));
    }

    #[test]
    fn signed_in_reports_name_the_user() {
        let report = build_report(
            &FilterCriteria::default(),
            generated(),
            &[],
            &SentimentLabels::default(),
            &TemplateRecommender,
            &Session {
                user: Some("frontdesk".to_string()),
            },
        );

        assert!(report.contains("Prepared for frontdesk"));
    }
}
