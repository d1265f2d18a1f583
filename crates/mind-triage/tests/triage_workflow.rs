use chrono::{TimeZone, Utc};
use mind_triage::triage::{
    classify, next_steps, recommend, score, Answer, Category, FixedClock, PatientProfile,
    QuestionCatalog, Recommendation, ReportAssembler, RiskAssessment, RiskLevel, Submission,
    SubmissionValidator, ValidationError,
};

fn answers(values: [u8; 10]) -> Vec<Answer> {
    QuestionCatalog::standard()
        .list_questions()
        .iter()
        .zip(values)
        .map(|(question, value)| Answer::new(question.id, question.category, value))
        .collect()
}

fn assembler() -> ReportAssembler<FixedClock> {
    let instant = Utc
        .with_ymd_and_hms(2025, 6, 2, 16, 0, 0)
        .single()
        .expect("valid instant");
    ReportAssembler::new(FixedClock(instant))
}

#[test]
fn catalog_answers_drive_a_complete_report() {
    let patient = PatientProfile::new("PAT-9", "Morgan Lee", 52);
    // mood 5, sleep 3, anxiety 4, cognitive 2, social 1, physical 2, risk 1, functioning 2
    let answers = answers([2, 3, 3, 2, 2, 2, 1, 2, 1, 2]);

    let submission = Submission {
        patient_data: patient.clone(),
        answers: answers.clone(),
    };
    SubmissionValidator::default()
        .validate(&submission)
        .expect("complete submission");

    let report = assembler().build(&patient, &answers).expect("report builds");

    assert_eq!(report.scores.total_score, 20);
    assert_eq!(report.scores.max_score, 30);
    assert_eq!(report.level(), RiskLevel::Moderate);
    assert_eq!(report.risk_assessment.severity(), 2);
    assert_eq!(
        report.risk_assessment.percentage().map(|p| p.to_string()),
        Some("66.7".to_string())
    );
    assert_eq!(report.next_steps, next_steps(RiskLevel::Moderate));

    let descriptions: Vec<(Category, &str)> = report
        .recommendations
        .iter()
        .filter_map(|recommendation| match recommendation {
            Recommendation::Category {
                category,
                description,
            } => Some((*category, *description)),
            Recommendation::General { .. } => None,
        })
        .collect();
    assert_eq!(descriptions.len(), 6);
    assert_eq!(descriptions[0].0, Category::Mood);
    assert!(descriptions[0].1.starts_with("Monitor mood changes"));
    assert_eq!(
        descriptions[1],
        (
            Category::Sleep,
            "Sleep quality has declined. Establish consistent sleep schedule and routines."
        )
    );
    assert_eq!(
        descriptions[4],
        (Category::Social, "Social engagement is healthy.")
    );
}

#[test]
fn critical_override_short_circuits_tiering() {
    let answers = answers([0, 0, 0, 0, 0, 0, 0, 0, 2, 0]);
    let assessment = classify(&score(&answers)).expect("classifies");

    match &assessment {
        RiskAssessment::Critical(critical) => {
            assert!(critical.recommendation.starts_with("EMERGENCY"));
            assert_eq!(critical.actions.len(), 3);
        }
        other => panic!("expected critical assessment, got {other:?}"),
    }
    assert!(assessment.category_breakdown().is_none());
    assert!(assessment.percentage().is_none());
    assert_eq!(recommend(&assessment).len(), 1);
}

#[test]
fn empty_submission_never_reaches_the_assembler() {
    let submission = Submission {
        patient_data: PatientProfile::new("PAT-10", "Sam Ortiz", 33),
        answers: Vec::new(),
    };

    assert_eq!(
        SubmissionValidator::default().validate(&submission),
        Err(ValidationError::EmptySubmission)
    );
}

#[test]
fn low_scores_keep_every_narrative_stable() {
    let patient = PatientProfile::new("PAT-11", "Riley Park", 24);
    let report = assembler()
        .build(&patient, &answers([0; 10]))
        .expect("report builds");

    assert_eq!(report.level(), RiskLevel::Low);
    assert_eq!(report.next_steps.len(), 3);
    assert!(matches!(
        report.recommendations[0],
        Recommendation::General {
            level: RiskLevel::Low,
            timeframe: "Ongoing maintenance",
            ..
        }
    ));
}
