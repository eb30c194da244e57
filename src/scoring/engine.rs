use super::factors::{
    experience_bonus, login_bonus, previous_client_penalty, type_bonus, weighted_review_score,
};
use super::report::ScoreReporter;
use crate::carer::CarerRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: &'static str, // e.g. "Reviews", "Login"
    pub description: String, // e.g. "4.0 avg, 1 image problems"
    pub value: f64,          // Signed amount added to the total
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
    pub total: f64,
}

/// Aggregate score for one carer. Pure; emits nothing.
pub fn score(carer: &CarerRecord) -> f64 {
    let weighted = weighted_review_score(carer.num_reviews, carer.avg_review, carer.img_problems);
    let category = type_bonus(&carer.carer_type);
    let penalty = previous_client_penalty(carer.num_previous_clients);
    let login = login_bonus(carer.days_since_login);
    let experience = experience_bonus(carer.years_experience);

    weighted + category + login + experience - penalty
}

/// Score one carer and hand the result to `reporter`.
pub fn score_with<R: ScoreReporter + ?Sized>(carer: &CarerRecord, reporter: &R) -> f64 {
    let total = score(carer);
    reporter.report(carer, total);
    total
}

/// Per-factor view of [`score`]. `total` matches `score(carer)` exactly.
pub fn score_breakdown(carer: &CarerRecord) -> ScoreBreakdown {
    let factors = vec![
        FactorContribution {
            label: "Reviews",
            description: format!(
                "{} avg, {} image problems",
                carer.avg_review, carer.img_problems
            ),
            value: weighted_review_score(carer.num_reviews, carer.avg_review, carer.img_problems),
        },
        FactorContribution {
            label: "Type",
            description: format!("'{}' ({})", carer.carer_type, carer.category()),
            value: type_bonus(&carer.carer_type),
        },
        FactorContribution {
            label: "Login",
            description: format!("{} days since login", carer.days_since_login),
            value: login_bonus(carer.days_since_login),
        },
        FactorContribution {
            label: "Experience",
            description: format!("{} years", carer.years_experience),
            value: experience_bonus(carer.years_experience),
        },
        FactorContribution {
            label: "Previous clients",
            description: format!("{} clients", carer.num_previous_clients),
            value: -previous_client_penalty(carer.num_previous_clients),
        },
    ];

    ScoreBreakdown {
        total: score(carer),
        factors,
    }
}
