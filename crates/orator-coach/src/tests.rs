//! Snapshot tests for the presentation coach

#[cfg(test)]
mod snapshot_tests {
    use crate::{PresentationCoach, Sentiment};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_sentiment_snapshot_for_short_positive_text() {
        let coach = PresentationCoach::new();
        let report = coach.analyze("I am happy. This is great news today.");

        assert_yaml_snapshot!(report.sentiment, @r###"
        ---
        label: POSITIVE
        confidence: 100
        "###);
        assert_eq!(report.structure.score, 26);
        assert_eq!(report.structure.sentence_count, 2);
        assert_eq!(report.complexity_score, 16);
        assert_eq!(report.word_count, 8);
        assert_eq!(report.estimated_minutes, 0.1);
    }

    #[test]
    fn test_suggestions_snapshot_for_short_positive_text() {
        let coach = PresentationCoach::new();
        let report = coach.analyze("I am happy. This is great news today.");

        assert_yaml_snapshot!(report.suggestions, @r###"
        ---
        - Add more structure and supporting detail; aim for several complete sentences.
        - Consider more sophisticated language for this context.
        "###);
    }

    #[test]
    fn test_sentiment_snapshot_for_empty_text() {
        let coach = PresentationCoach::new();
        let report = coach.analyze("");

        assert_yaml_snapshot!(report.sentiment, @r###"
        ---
        label: NEUTRAL
        confidence: 50
        "###);
        assert_eq!(report.structure.score, 0);
        assert_eq!(report.structure.sentence_count, 0);
        assert_eq!(report.complexity_score, 0);
        assert_eq!(report.word_count, 0);
    }

    #[test]
    fn test_suggestions_snapshot_for_negative_text() {
        let coach = PresentationCoach::new();
        let report = coach.analyze("Our worst failure. A terrible disaster.");

        assert_eq!(report.sentiment.label, Sentiment::Negative);
        assert_yaml_snapshot!(report.suggestions, @r###"
        ---
        - Consider more positive framing; the current wording leans heavily negative.
        - Add more structure and supporting detail; aim for several complete sentences.
        "###);
    }
}
