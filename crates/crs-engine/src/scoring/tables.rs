//! Fixed point tables, one pure lookup per scoring category.

use super::config::SecondLanguageSchedule;
use super::domain::{CanadianEducation, EducationLevel, ExperienceBucket, ProficiencyProfile};

pub const PROVINCIAL_NOMINATION_POINTS: u32 = 600;
pub const ARRANGED_EMPLOYMENT_POINTS: u32 = 50;
pub const CERTIFICATE_OF_QUALIFICATION_POINTS: u32 = 50;
pub const CANADIAN_FAMILY_POINTS: u32 = 15;

/// Per-skill cap for the first official language.
pub const FIRST_LANGUAGE_SKILL_MAX: u32 = 32;

pub fn age_points(age: u32) -> u32 {
    match age {
        18 => 90,
        19 => 95,
        20 => 100,
        21 => 105,
        22..=30 => 110,
        31 => 105,
        32 => 99,
        33 => 94,
        34 => 88,
        35 => 77,
        36 => 72,
        37 => 66,
        38 => 61,
        39 => 55,
        40 => 50,
        41 => 39,
        42 => 28,
        43 => 17,
        44 => 6,
        _ => 0,
    }
}

pub fn education_points(education: EducationLevel) -> u32 {
    match education {
        EducationLevel::BelowSecondary => 0,
        EducationLevel::Secondary => 30,
        EducationLevel::OneYearProgram => 90,
        EducationLevel::TwoYearProgram => 98,
        EducationLevel::Bachelors => 120,
        EducationLevel::TwoOrMoreCredentials => 128,
        EducationLevel::Masters => 135,
        EducationLevel::Doctoral => 140,
        EducationLevel::Unrecognized => 0,
    }
}

pub fn first_language_skill_points(level: i32) -> u32 {
    match level {
        level if level >= 10 => FIRST_LANGUAGE_SKILL_MAX,
        9 => 29,
        8 => 22,
        7 => 16,
        6 => 8,
        5 => 6,
        4 => 4,
        _ => 0,
    }
}

pub fn second_language_skill_points(schedule: SecondLanguageSchedule, level: i32) -> u32 {
    match schedule {
        SecondLanguageSchedule::Calculator => match level {
            level if level >= 5 => 4,
            4 => 2,
            _ => 0,
        },
        SecondLanguageSchedule::Conversational => match level {
            level if level >= 7 => 6,
            5 | 6 => 3,
            _ => 0,
        },
    }
}

pub fn first_language_points(profile: &ProficiencyProfile) -> u32 {
    profile
        .levels()
        .map(|(_, level)| first_language_skill_points(level))
        .sum()
}

pub fn second_language_points(
    schedule: SecondLanguageSchedule,
    profile: Option<&ProficiencyProfile>,
) -> u32 {
    profile
        .map(|profile| {
            profile
                .levels()
                .map(|(_, level)| second_language_skill_points(schedule, level))
                .sum()
        })
        .unwrap_or(0)
}

/// Only the listed buckets score; anything else (e.g. `6`) falls back to zero.
pub fn canadian_experience_points(bucket: ExperienceBucket) -> u32 {
    match bucket {
        ExperienceBucket::Years(0) => 0,
        ExperienceBucket::Years(1) => 40,
        ExperienceBucket::Years(2) => 53,
        ExperienceBucket::Years(3) => 64,
        ExperienceBucket::Years(4) => 72,
        ExperienceBucket::Years(5) | ExperienceBucket::AtLeast(5) => 80,
        _ => 0,
    }
}

pub fn foreign_experience_points(bucket: ExperienceBucket) -> u32 {
    match bucket {
        ExperienceBucket::Years(1) | ExperienceBucket::Years(2) => 13,
        ExperienceBucket::Years(3) | ExperienceBucket::AtLeast(3) => 25,
        _ => 0,
    }
}

pub fn canadian_education_points(education: CanadianEducation) -> u32 {
    match education {
        CanadianEducation::OneOrTwoYear => 15,
        CanadianEducation::ThreeOrMoreYear => 30,
        CanadianEducation::NoCredential
        | CanadianEducation::Secondary
        | CanadianEducation::Unrecognized => 0,
    }
}
