use super::common::*;
use crate::triage::classifier::{classify, RiskAssessment};
use crate::triage::domain::{Category, RiskLevel};
use crate::triage::recommendations::{narrative_for, recommend, Recommendation};
use crate::triage::report::ReportAssembler;
use crate::triage::scoring::{score, ScoreSummary};

fn level_of(answers: &[crate::triage::domain::Answer]) -> RiskLevel {
    classify(&score(answers)).expect("classifies").level()
}

#[test]
fn total_score_never_exceeds_max() {
    for value in 0..=3 {
        let summary = score(&uniform_answers(value));
        assert_eq!(summary.total_score, u32::from(value) * 10);
        assert_eq!(summary.max_score, 30);
        assert!(summary.total_score <= summary.max_score);
    }
}

#[test]
fn risk_answer_of_two_overrides_an_otherwise_empty_score() {
    let answers = answers_with(0, &[(9, 2)]);
    assert_eq!(level_of(&answers), RiskLevel::Critical);
}

#[test]
fn uniform_ones_classify_as_mild() {
    let answers = uniform_answers(1);
    let assessment = classify(&score(&answers)).expect("classifies");

    match assessment {
        RiskAssessment::Tiered(tiered) => {
            assert_eq!(tiered.level(), RiskLevel::Mild);
            assert_eq!(tiered.score(), 10);
            assert_eq!(tiered.max_score(), 30);
            assert_eq!(tiered.percentage().to_string(), "33.3");
            assert_eq!(tiered.category_breakdown().get(Category::Mood), Some(2));
        }
        other => panic!("expected tiered assessment, got {other:?}"),
    }
}

#[test]
fn maximal_answers_are_critical_regardless_of_total() {
    assert_eq!(level_of(&uniform_answers(3)), RiskLevel::Critical);
}

#[test]
fn risk_answer_of_one_does_not_override() {
    let answers = answers_with(3, &[(9, 1)]);
    // 28 of 30.
    assert_eq!(level_of(&answers), RiskLevel::Severe);
}

#[test]
fn percentage_tiers_hold_at_exact_boundaries() {
    // 21 of 30 is exactly 70.0.
    let severe = answers_with(2, &[(1, 3), (9, 1), (10, 3)]);
    assert_eq!(score(&severe).total_score, 21);
    assert_eq!(level_of(&severe), RiskLevel::Severe);

    let moderate_upper = answers_with(2, &[(9, 1), (10, 3)]);
    assert_eq!(score(&moderate_upper).total_score, 20);
    assert_eq!(level_of(&moderate_upper), RiskLevel::Moderate);

    // 15 of 30 is exactly 50.0.
    let moderate = answers_with(1, &[(1, 3), (2, 3), (3, 2)]);
    assert_eq!(score(&moderate).total_score, 15);
    assert_eq!(level_of(&moderate), RiskLevel::Moderate);

    let exact_quarter = ScoreSummary {
        total_score: 3,
        category_scores: [(Category::Mood, 3)].into_iter().collect(),
        max_score: 12,
    };
    assert_eq!(
        classify(&exact_quarter).expect("classifies").level(),
        RiskLevel::Mild
    );

    let below_quarter = answers_with(0, &[(1, 3), (2, 3), (3, 1)]);
    assert_eq!(score(&below_quarter).total_score, 7);
    assert_eq!(level_of(&below_quarter), RiskLevel::Low);
}

#[test]
fn classification_depends_only_on_risk_band_and_tier() {
    let mood_heavy = answers_with(0, &[(1, 3), (2, 3), (4, 2)]);
    let spread_out = answers_with(0, &[(3, 2), (5, 2), (6, 2), (10, 2)]);
    assert_eq!(score(&mood_heavy).total_score, score(&spread_out).total_score);
    assert_eq!(level_of(&mood_heavy), level_of(&spread_out));
    assert_eq!(level_of(&mood_heavy), RiskLevel::Mild);
}

#[test]
fn mood_subtotal_of_six_selects_severe_narrative() {
    let answers = answers_with(0, &[(1, 3), (2, 3)]);
    let assessment = classify(&score(&answers)).expect("classifies");
    let recommendations = recommend(&assessment);

    let mood = recommendations
        .iter()
        .find_map(|recommendation| match recommendation {
            Recommendation::Category {
                category: Category::Mood,
                description,
            } => Some(*description),
            _ => None,
        })
        .expect("mood recommendation present");

    let narrative = narrative_for(Category::Mood).expect("mood narrative");
    assert_eq!(mood, narrative.severe);
}

#[test]
fn recommend_emits_general_plus_narrated_categories() {
    let answers = uniform_answers(1);
    let assessment = classify(&score(&answers)).expect("classifies");
    let recommendations = recommend(&assessment);

    // Eight categories present, risk and functioning have no narrative.
    assert_eq!(recommendations.len(), 1 + 6);
    match &recommendations[0] {
        Recommendation::General {
            level, timeframe, ..
        } => {
            assert_eq!(*level, RiskLevel::Mild);
            assert_eq!(*timeframe, "Within 1 month");
        }
        other => panic!("expected general recommendation first, got {other:?}"),
    }
    assert!(recommendations.iter().all(|recommendation| !matches!(
        recommendation,
        Recommendation::Category {
            category: Category::Risk | Category::Functioning,
            ..
        }
    )));
}

#[test]
fn critical_assessment_yields_only_the_general_plan() {
    let assessment = classify(&score(&uniform_answers(3))).expect("classifies");
    let recommendations = recommend(&assessment);

    assert_eq!(recommendations.len(), 1);
    assert!(matches!(
        recommendations[0],
        Recommendation::General {
            level: RiskLevel::Critical,
            ..
        }
    ));
}

#[test]
fn category_recommendations_follow_submission_order() {
    let mut answers = uniform_answers(1);
    answers.reverse();
    let assessment = classify(&score(&answers)).expect("classifies");

    let order: Vec<Category> = recommend(&assessment)
        .into_iter()
        .filter_map(|recommendation| match recommendation {
            Recommendation::Category { category, .. } => Some(category),
            Recommendation::General { .. } => None,
        })
        .collect();

    assert_eq!(
        order,
        vec![
            Category::Physical,
            Category::Social,
            Category::Cognitive,
            Category::Anxiety,
            Category::Sleep,
            Category::Mood,
        ]
    );
}

#[test]
fn build_report_is_idempotent_under_fixed_clock() {
    let assembler = ReportAssembler::new(clock());
    let answers = answers_with(1, &[(1, 3), (2, 2)]);

    let first = assembler.build(&patient(), &answers).expect("report builds");
    let second = assembler.build(&patient(), &answers).expect("report builds");

    assert_eq!(first, second);
    assert_eq!(first.completed_at, completed_at());
    assert_eq!(first.patient_name, "Jordan Reyes");
    assert_eq!(first.level(), RiskLevel::Mild);
    assert_eq!(first.next_steps.len(), 4);
    assert_eq!(first.next_steps[0].action, "Maintain healthy habits");
}

#[test]
fn report_serializes_with_original_field_names() {
    let assembler = ReportAssembler::new(clock());
    let report = assembler
        .build(&patient(), &uniform_answers(1))
        .expect("report builds");
    let value = serde_json::to_value(&report).expect("json");

    assert_eq!(value["patientId"], "PAT-1001");
    assert_eq!(value["patientAge"], 29);
    assert_eq!(value["completedAt"], "2025-03-14T09:30:00Z");
    assert_eq!(value["scores"]["maxScore"], 30);
    assert_eq!(value["riskAssessment"]["percentage"], "33.3");
    assert_eq!(value["recommendations"][0]["type"], "general");
    assert_eq!(value["nextSteps"][0]["step"], 1);
}
