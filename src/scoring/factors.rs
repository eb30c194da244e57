use crate::carer::CarerType;

/// Number of image problems at which the review score is wiped out.
pub const IMG_PROBLEM_SCALE: f64 = 8.0;
/// Days of inactivity after which the login bonus drops to zero.
pub const LOGIN_WINDOW_DAYS: i64 = 30;
/// Prior-client count at which the penalty reaches half its ceiling.
pub const PREVIOUS_CLIENT_HALF_POINT: f64 = 5.0;
/// Years of experience worth a full 100 points.
pub const EXPERIENCE_SCALE_YEARS: f64 = 10.0;

/// Average review scaled down by the share of image problems.
///
/// `num_reviews` is accepted for signature parity with the roster columns but
/// does not affect the result. More than 8 problems yields a negative score.
pub fn weighted_review_score(_num_reviews: i64, avg_review: f64, img_problems: i64) -> f64 {
    ((IMG_PROBLEM_SCALE - img_problems as f64) / IMG_PROBLEM_SCALE) * avg_review
}

pub fn type_bonus(carer_type: &str) -> f64 {
    match CarerType::classify(carer_type) {
        CarerType::Expert => 0.1,
        CarerType::Advanced => 0.05,
        CarerType::Other => 0.0,
    }
}

/// Grows toward 100 as the client count rises. Subtracted from the total.
pub fn previous_client_penalty(num_previous_clients: u32) -> f64 {
    let n = num_previous_clients as f64;
    (n / (n + PREVIOUS_CLIENT_HALF_POINT)) * 100.0
}

/// Linear bonus for recent logins; zero once the login is older than 30 days.
/// A negative day count is not rejected and pushes the bonus past 100.
pub fn login_bonus(days_since_login: i64) -> f64 {
    if days_since_login > LOGIN_WINDOW_DAYS {
        return 0.0;
    }
    let window = LOGIN_WINDOW_DAYS as f64;
    ((window - days_since_login as f64) / window) * 100.0
}

/// Ten points per year, no cap.
pub fn experience_bonus(years_experience: i64) -> f64 {
    (years_experience as f64 / EXPERIENCE_SCALE_YEARS) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_weighted_review_no_problems_is_average() {
        for avg in [0.0, 1.0, 3.7, 4.0, 5.0] {
            assert_eq!(weighted_review_score(10, avg, 0), avg);
        }
    }

    #[test]
    fn test_weighted_review_max_problems_is_zero() {
        assert_eq!(weighted_review_score(10, 4.8, 8), 0.0);
    }

    #[test]
    fn test_weighted_review_partial_problems() {
        // 6/8 of 4.0
        assert!((weighted_review_score(3, 4.0, 2) - 3.0).abs() < EPS);
    }

    #[test]
    fn test_weighted_review_ignores_review_count() {
        assert_eq!(
            weighted_review_score(0, 4.2, 1),
            weighted_review_score(500, 4.2, 1)
        );
    }

    #[test]
    fn test_weighted_review_goes_negative_past_scale() {
        // (8 - 10) / 8 * 4.0 = -1.0
        assert!((weighted_review_score(1, 4.0, 10) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_type_bonus_values() {
        assert_eq!(type_bonus("expert"), 0.1);
        assert_eq!(type_bonus("advanced"), 0.05);
        assert_eq!(type_bonus("volunteer"), 0.0);
        assert_eq!(type_bonus(""), 0.0);
    }

    #[test]
    fn test_type_bonus_case_sensitive() {
        assert_eq!(type_bonus("EXPERT"), 0.0);
        assert_eq!(type_bonus("Advanced"), 0.0);
    }

    #[test]
    fn test_previous_client_penalty_points() {
        assert_eq!(previous_client_penalty(0), 0.0);
        assert_eq!(previous_client_penalty(5), 50.0);
        assert!((previous_client_penalty(2) - 200.0 / 7.0).abs() < EPS);
    }

    #[test]
    fn test_previous_client_penalty_monotonic_below_ceiling() {
        let mut last = previous_client_penalty(0);
        for n in 1..200 {
            let current = previous_client_penalty(n);
            assert!(current > last, "penalty not increasing at n={}", n);
            assert!(current < 100.0);
            last = current;
        }
        assert!(previous_client_penalty(1_000_000) > 99.99);
    }

    #[test]
    fn test_login_bonus_boundaries() {
        assert_eq!(login_bonus(0), 100.0);
        assert_eq!(login_bonus(30), 0.0);
        assert_eq!(login_bonus(31), 0.0);
        assert_eq!(login_bonus(365), 0.0);
    }

    #[test]
    fn test_login_bonus_linear_inside_window() {
        assert!((login_bonus(15) - 50.0).abs() < EPS);
        assert!((login_bonus(5) - 250.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_negative_counts_follow_arithmetic() {
        assert!((login_bonus(-3) - 110.0).abs() < EPS);
        assert_eq!(experience_bonus(-1), -10.0);
        assert_eq!(weighted_review_score(-1, 4.0, 0), 4.0);
    }

    #[test]
    fn test_experience_bonus_uncapped() {
        assert_eq!(experience_bonus(0), 0.0);
        assert_eq!(experience_bonus(10), 100.0);
        assert_eq!(experience_bonus(20), 200.0);
    }
}
