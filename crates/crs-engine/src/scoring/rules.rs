use super::config::ScoringConfig;
use super::domain::CandidateProfile;
use super::tables;
use super::{CategoryScore, ScoreCategory};

pub(crate) fn score_categories(
    profile: &CandidateProfile,
    config: &ScoringConfig,
) -> Vec<CategoryScore> {
    let mut components = Vec::with_capacity(ScoreCategory::ALL.len());

    components.push(CategoryScore {
        category: ScoreCategory::Age,
        points: tables::age_points(profile.age),
        notes: format!("age {}", profile.age),
    });

    components.push(CategoryScore {
        category: ScoreCategory::Education,
        points: tables::education_points(profile.education),
        notes: profile.education.label().to_string(),
    });

    let first = &profile.first_language;
    components.push(CategoryScore {
        category: ScoreCategory::FirstOfficialLanguage,
        points: tables::first_language_points(first),
        notes: format!(
            "levels S{} L{} R{} W{}",
            first.speaking, first.listening, first.reading, first.writing
        ),
    });

    let schedule = config.second_language_schedule;
    let second_notes = match &profile.second_language {
        Some(second) => format!(
            "levels S{} L{} R{} W{} ({} schedule)",
            second.speaking, second.listening, second.reading, second.writing, schedule
        ),
        None => "no second language".to_string(),
    };
    components.push(CategoryScore {
        category: ScoreCategory::SecondOfficialLanguage,
        points: tables::second_language_points(schedule, profile.second_language.as_ref()),
        notes: second_notes,
    });

    components.push(CategoryScore {
        category: ScoreCategory::CanadianWorkExperience,
        points: tables::canadian_experience_points(profile.canadian_experience),
        notes: format!("{} year(s)", profile.canadian_experience),
    });

    components.push(CategoryScore {
        category: ScoreCategory::ForeignWorkExperience,
        points: tables::foreign_experience_points(profile.foreign_experience),
        notes: format!("{} year(s)", profile.foreign_experience),
    });

    components.push(additional_factors(profile));

    components
}

fn additional_factors(profile: &CandidateProfile) -> CategoryScore {
    let mut points = 0;
    let mut triggered = Vec::new();

    if profile.provincial_nomination {
        points += tables::PROVINCIAL_NOMINATION_POINTS;
        triggered.push("provincial nomination");
    }

    if profile.arranged_employment {
        points += tables::ARRANGED_EMPLOYMENT_POINTS;
        triggered.push("arranged employment");
    }

    if profile.certificate_of_qualification {
        points += tables::CERTIFICATE_OF_QUALIFICATION_POINTS;
        triggered.push("certificate of qualification");
    }

    let education_bonus = tables::canadian_education_points(profile.canadian_education);
    if education_bonus > 0 {
        points += education_bonus;
        triggered.push("canadian education");
    }

    if profile.canadian_family {
        points += tables::CANADIAN_FAMILY_POINTS;
        triggered.push("canadian family");
    }

    let notes = if triggered.is_empty() {
        "none".to_string()
    } else {
        triggered.join(", ")
    };

    CategoryScore {
        category: ScoreCategory::AdditionalFactors,
        points,
        notes,
    }
}
