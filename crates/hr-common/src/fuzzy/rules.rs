use super::membership::Membership;

fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

/// Applies the rule bank to the three input memberships.
///
/// The bank is hand-authored and asymmetric; it is not a fuzzy AND over all
/// 27 input combinations. min is fuzzy AND within a rule, max is fuzzy OR
/// across the alternative rules for one output category.
pub fn combine(test: Membership, skills: Membership, interview: Membership) -> Membership {
    let low = min3(test.low, skills.low, interview.low)
        .max(min3(test.low, skills.medium, interview.low))
        .max(min3(test.low, skills.low, interview.medium))
        .max(min3(test.medium, skills.low, interview.low));

    let medium = min3(test.medium, skills.medium, interview.medium)
        .max(min3(test.low, skills.high, interview.medium))
        .max(min3(test.high, skills.low, interview.medium))
        .max(min3(test.medium, skills.medium, interview.low))
        .max(min3(test.medium, skills.low, interview.high));

    let high = min3(test.high, skills.high, interview.high)
        .max(min3(test.medium, skills.high, interview.high))
        .max(min3(test.high, skills.medium, interview.high))
        .max(min3(test.high, skills.high, interview.medium));

    Membership { low, medium, high }
}

/// Collapses rule activations into a single selection score in [0, 1].
///
/// Weighted average over the category weights 0.2 / 0.5 / 1.0. Returns 0
/// when no rule fired rather than dividing by zero.
pub fn defuzzify(rules: Membership) -> f64 {
    let total_weight = rules.low + rules.medium + rules.high;
    if total_weight == 0.0 {
        return 0.0;
    }

    (rules.low * 0.2 + rules.medium * 0.5 + rules.high * 1.0) / total_weight
}
