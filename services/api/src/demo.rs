use crate::infra::{answers_from_values, InMemoryReportRepository};
use clap::Args;
use mind_triage::error::AppError;
use mind_triage::triage::{
    resources_for, PatientProfile, QuestionCatalog, Recommendation, RiskAssessment, StoredReport,
    Submission, SystemClock, TriageReport, TriageService,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Patient name printed on the report
    #[arg(long)]
    pub(crate) name: String,
    /// Patient age in years (1-150)
    #[arg(long)]
    pub(crate) age: u16,
    /// Patient identifier (generated when omitted)
    #[arg(long)]
    pub(crate) patient_id: Option<String>,
    /// Comma-separated answer values (0-3), one per question in id order
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    pub(crate) answers: Vec<u8>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full report for every sample patient
    #[arg(long)]
    pub(crate) details: bool,
}

struct SamplePatient {
    name: &'static str,
    age: u16,
    answers: [u8; 10],
}

const SAMPLE_PATIENTS: [SamplePatient; 5] = [
    SamplePatient {
        name: "Riley Park",
        age: 24,
        answers: [0, 0, 1, 0, 0, 1, 0, 0, 0, 0],
    },
    SamplePatient {
        name: "Morgan Lee",
        age: 52,
        answers: [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    },
    SamplePatient {
        name: "Avery Chen",
        age: 41,
        answers: [2, 3, 3, 2, 2, 2, 1, 2, 1, 2],
    },
    SamplePatient {
        name: "Sam Ortiz",
        age: 33,
        answers: [3, 3, 3, 3, 2, 3, 3, 2, 1, 3],
    },
    SamplePatient {
        name: "Jordan Reyes",
        age: 19,
        answers: [1, 1, 0, 1, 0, 0, 1, 0, 2, 1],
    },
];

pub(crate) fn list_questions() {
    let catalog = QuestionCatalog::standard();
    println!("Screening questionnaire ({} questions)", catalog.len());
    for question in catalog.list_questions() {
        println!(
            "{:>2}. [{}] {}",
            question.id,
            question.category.label(),
            question.prompt
        );
        let scale: Vec<String> = question
            .options
            .iter()
            .map(|option| format!("{}={}", option.value, option.label))
            .collect();
        println!("    {}", scale.join(" | "));
    }
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        name,
        age,
        patient_id,
        answers,
        json,
    } = args;

    let service = TriageService::new(Arc::new(InMemoryReportRepository::default()), SystemClock);
    if answers.len() > service.catalog().len() {
        return Err(AppError::Input(format!(
            "expected {} answer values, got {}",
            service.catalog().len(),
            answers.len()
        )));
    }

    let submission = Submission {
        patient_data: PatientProfile::new(patient_id.unwrap_or_default(), name, age),
        answers: answers_from_values(service.catalog(), &answers),
    };

    let stored = service.submit(submission)?;
    if json {
        let payload = serde_json::to_string_pretty(&stored)
            .map_err(|err| AppError::Input(format!("report could not be encoded: {err}")))?;
        println!("{payload}");
    } else {
        render_report(&stored);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryReportRepository::default());
    let service = TriageService::new(repository.clone(), SystemClock);

    println!("Mental health triage demo");
    for sample in &SAMPLE_PATIENTS {
        let submission = Submission {
            patient_data: PatientProfile::new("", sample.name, sample.age),
            answers: answers_from_values(service.catalog(), &sample.answers),
        };
        let stored = match service.submit(submission) {
            Ok(stored) => stored,
            Err(err) => {
                println!("- {}: submission rejected: {}", sample.name, err);
                continue;
            }
        };

        let report = &stored.report;
        let level = report.level();
        println!(
            "- {} ({}): {} | score {}/{} | support priority {:?}",
            report.patient_name,
            report.patient_age,
            level,
            report.scores.total_score,
            report.scores.max_score,
            resources_for(level).priority
        );
        if args.details {
            render_report(&stored);
        }
    }

    println!("Reports held in memory: {}", repository.len());
    Ok(())
}

pub(crate) fn render_report(stored: &StoredReport) {
    let report: &TriageReport = &stored.report;
    println!("\nTriage report {}", stored.report_id);
    println!(
        "Patient: {} ({}), age {}",
        report.patient_name, report.patient_id, report.patient_age
    );
    println!("Completed: {}", report.completed_at.to_rfc3339());

    match &report.risk_assessment {
        RiskAssessment::Critical(critical) => {
            println!(
                "Risk level: {} (severity {})",
                report.level(),
                report.level().severity()
            );
            println!("  {}", critical.description);
            println!("  {}", critical.recommendation);
            for action in critical.actions {
                println!("  ! {action}");
            }
        }
        RiskAssessment::Tiered(tiered) => {
            println!(
                "Risk level: {} (severity {}) | score {}/{} ({}%)",
                tiered.level(),
                tiered.level().severity(),
                tiered.score(),
                tiered.max_score(),
                tiered.percentage()
            );
            println!("Category breakdown:");
            for (category, subtotal) in tiered.category_breakdown().iter() {
                println!("  - {}: {}", category.label(), subtotal);
            }
        }
    }

    println!("Recommendations:");
    for recommendation in &report.recommendations {
        match recommendation {
            Recommendation::General {
                title,
                actions,
                timeframe,
                ..
            } => {
                println!("  {title} ({timeframe})");
                for action in actions.iter() {
                    println!("    - {action}");
                }
            }
            Recommendation::Category {
                category,
                description,
            } => println!("  [{}] {}", category.label(), description),
        }
    }

    println!("Next steps:");
    for step in &report.next_steps {
        println!("  {}. {}", step.step, step.action);
    }
}
