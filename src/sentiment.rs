use std::collections::HashMap;

use crate::models::{
    ClassMeanScore, ClassSentimentCount, FeedbackRecord, SentimentLabels, SentimentTotals,
};

/// Counts positive and negative rows per touch-point class. Classes are
/// sorted ascending and keep explicit zero counts. Returns `None` when no
/// row carries a recognized label, which is distinct from a class having
/// zero of one sentiment.
pub fn count_by_sentiment(
    records: &[FeedbackRecord],
    labels: &SentimentLabels,
) -> Option<Vec<ClassSentimentCount>> {
    let mut map: HashMap<String, (usize, usize)> = HashMap::new();

    for record in records {
        if record.sentiment == labels.positive {
            map.entry(record.class.clone()).or_insert((0, 0)).0 += 1;
        } else if record.sentiment == labels.negative {
            map.entry(record.class.clone()).or_insert((0, 0)).1 += 1;
        }
    }

    if map.is_empty() {
        return None;
    }

    let mut counts: Vec<ClassSentimentCount> = map
        .into_iter()
        .map(|(class, (positive, negative))| ClassSentimentCount {
            class,
            positive,
            negative,
        })
        .collect();

    counts.sort_by(|a, b| a.class.cmp(&b.class));
    Some(counts)
}

/// Overall positive/negative split, for the proportion summary.
pub fn overall_distribution(
    records: &[FeedbackRecord],
    labels: &SentimentLabels,
) -> Option<SentimentTotals> {
    let mut totals = SentimentTotals::default();

    for record in records {
        if record.sentiment == labels.positive {
            totals.positive += 1;
        } else if record.sentiment == labels.negative {
            totals.negative += 1;
        }
    }

    if totals.total() == 0 {
        None
    } else {
        Some(totals)
    }
}

/// Mean sentiment score per class over the rows that carry a score.
/// Classes with no scored rows are excluded rather than reported as zero.
pub fn mean_score_by_class(records: &[FeedbackRecord]) -> Vec<ClassMeanScore> {
    let mut map: HashMap<String, (f64, usize)> = HashMap::new();

    for record in records {
        if let Some(score) = record.sentiment_score {
            let entry = map.entry(record.class.clone()).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }

    let mut means: Vec<ClassMeanScore> = map
        .into_iter()
        .map(|(class, (sum, count))| ClassMeanScore {
            class,
            mean_score: sum / count as f64,
        })
        .collect();

    means.sort_by(|a, b| a.class.cmp(&b.class));
    means
}

/// Splits the filtered set into its positive and negative rows, in input
/// order, for the comment view and the recommendation stage.
pub fn partition_comments<'a>(
    records: &'a [FeedbackRecord],
    labels: &SentimentLabels,
) -> (Vec<&'a FeedbackRecord>, Vec<&'a FeedbackRecord>) {
    let positive = records
        .iter()
        .filter(|record| record.sentiment == labels.positive)
        .collect();
    let negative = records
        .iter()
        .filter(|record| record.sentiment == labels.negative)
        .collect();
    (positive, negative)
}
