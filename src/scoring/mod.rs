pub mod engine;
pub mod factors;
pub mod rank;
pub mod report;

pub use engine::{score, score_breakdown, score_with, FactorContribution, ScoreBreakdown};
pub use factors::{
    experience_bonus, login_bonus, previous_client_penalty, type_bonus, weighted_review_score,
};
pub use rank::{rank_by_score, rank_scored, RankedCarer};
pub use report::{BufferedReporter, LogReporter, NullReporter, ScoreReporter};
