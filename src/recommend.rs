use crate::models::Recommendation;

pub const POSITIVE_TEMPLATE: &str =
    "Patients highlight recurring strengths in this selection. Keep reinforcing \
     the practices praised in the positive comments.";
pub const NO_POSITIVE_TEMPLATE: &str =
    "No positive feedback is available for this selection.";
pub const NEGATIVE_TEMPLATE: &str =
    "Patients raise recurring concerns in this selection. Review the negative \
     comments and address the most frequent complaints first.";
pub const NO_NEGATIVE_TEMPLATE: &str =
    "No negative feedback is available for this selection.";

/// Turns the positive and negative comment lists into guidance text. The
/// shipped implementation only checks presence; a summarization backend
/// can replace it without touching the rest of the pipeline.
pub trait Recommender {
    fn recommend(&self, positive: &[String], negative: &[String]) -> Recommendation;
}

#[derive(Debug, Default)]
pub struct TemplateRecommender;

impl Recommender for TemplateRecommender {
    fn recommend(&self, positive: &[String], negative: &[String]) -> Recommendation {
        let positive_text = if positive.is_empty() {
            NO_POSITIVE_TEMPLATE
        } else {
            POSITIVE_TEMPLATE
        };
        let negative_text = if negative.is_empty() {
            NO_NEGATIVE_TEMPLATE
        } else {
            NEGATIVE_TEMPLATE
        };

        Recommendation {
            positive_text: positive_text.to_string(),
            negative_text: negative_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_yield_both_no_feedback_templates() {
        let recommendation = TemplateRecommender.recommend(&[], &[]);
        assert_eq!(recommendation.positive_text, NO_POSITIVE_TEMPLATE);
        assert_eq!(recommendation.negative_text, NO_NEGATIVE_TEMPLATE);
    }

    #[test]
    fn each_side_is_judged_independently() {
        let positive = vec!["Friendly staff".to_string()];
        let recommendation = TemplateRecommender.recommend(&positive, &[]);
        assert_eq!(recommendation.positive_text, POSITIVE_TEMPLATE);
        assert_eq!(recommendation.negative_text, NO_NEGATIVE_TEMPLATE);

        let negative = vec!["Long wait".to_string()];
        let recommendation = TemplateRecommender.recommend(&[], &negative);
        assert_eq!(recommendation.positive_text, NO_POSITIVE_TEMPLATE);
        assert_eq!(recommendation.negative_text, NEGATIVE_TEMPLATE);
    }

    #[test]
    fn comment_content_does_not_change_the_outcome() {
        let first = TemplateRecommender.recommend(
            &["terrible".to_string()],
            &["wonderful".to_string()],
        );
        let second = TemplateRecommender.recommend(
            &["wonderful".to_string()],
            &["terrible".to_string()],
        );
        assert_eq!(first, second);
    }
}
