/// One row of patient feedback after loading and normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub clinic: String,
    pub physician: String,
    pub comment: String,
    /// Patient-journey touch point the comment was filed under.
    pub class: String,
    /// Raw polarity label as it appears in the source. Casing varies
    /// between source variants.
    pub sentiment: String,
    pub sentiment_score: Option<f64>,
}

/// Clinic/physician selection. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub clinic: Option<String>,
    pub physician: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from dropdown-style selections, where the sentinel
    /// "All" (or an absent value) means unconstrained.
    pub fn from_selections(clinic: Option<String>, physician: Option<String>) -> Self {
        Self {
            clinic: clinic.filter(|value| value != "All"),
            physician: physician.filter(|value| value != "All"),
        }
    }
}

/// The recognized polar label pair. Matching is case-sensitive because the
/// source files themselves disagree on casing.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentLabels {
    pub positive: String,
    pub negative: String,
}

impl Default for SentimentLabels {
    fn default() -> Self {
        Self {
            positive: "positive".to_string(),
            negative: "negative".to_string(),
        }
    }
}

impl SentimentLabels {
    /// Label set used by the uppercase source variant.
    pub fn uppercase() -> Self {
        Self {
            positive: "POSITIVE".to_string(),
            negative: "NEGATIVE".to_string(),
        }
    }
}

/// Sentiment counts for a single touch-point class. Zero counts are kept,
/// never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSentimentCount {
    pub class: String,
    pub positive: usize,
    pub negative: usize,
}

/// Overall positive/negative split across the filtered set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentTotals {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentTotals {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Mean sentiment score for one class; classes with no scored rows never
/// produce a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMeanScore {
    pub class: String,
    pub mean_score: f64,
}

/// Canned guidance derived from comment presence alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub positive_text: String,
    pub negative_text: String,
}
