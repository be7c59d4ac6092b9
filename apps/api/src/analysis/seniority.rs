//! Seniority classifier — keyword buckets over the role title, with a
//! years-of-experience fallback when the title carries no signal.

use crate::models::profile::Seniority;

const FOUNDER_KEYWORDS: &[&str] = &["founder", "ceo", "cto", "cfo", "president", "chief"];
const DIRECTOR_KEYWORDS: &[&str] = &["director", "vp", "vice president", "head of"];
const LEAD_KEYWORDS: &[&str] = &["lead", "principal", "staff"];
const MID_KEYWORDS: &[&str] = &["mid", "intermediate", "specialist"];
const JUNIOR_KEYWORDS: &[&str] = &["junior", "intern", "student", "graduate", "jr"];

/// Determines seniority from a role title. Buckets are checked in precedence
/// order — a "Founder & Lead Engineer" is a founder, not a lead.
pub fn determine_seniority(role: &str, years_experience: u32) -> Seniority {
    let role_lower = role.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| role_lower.contains(k));

    if has(FOUNDER_KEYWORDS) {
        return Seniority::Founder;
    }
    if has(DIRECTOR_KEYWORDS) {
        return Seniority::Senior;
    }
    if has(LEAD_KEYWORDS) {
        return Seniority::Lead;
    }
    if role_lower.contains("senior") {
        return Seniority::Senior;
    }
    if has(MID_KEYWORDS) {
        return Seniority::Mid;
    }
    if has(JUNIOR_KEYWORDS) {
        return Seniority::Junior;
    }

    // Title carried no signal — fall back on experience
    if years_experience >= 12 {
        Seniority::Senior
    } else if years_experience >= 6 {
        Seniority::Mid
    } else {
        Seniority::Junior
    }
}
