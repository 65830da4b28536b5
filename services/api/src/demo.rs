use crate::infra::scoring_service;
use clap::Args;
use crs_engine::config::AppConfig;
use crs_engine::error::AppError;
use crs_engine::scoring::{
    CandidateBatchImporter, CandidateSubmission, CanadianEducation, EducationLevel,
    ExperienceBucket, LanguageResult, LanguageTest, MaritalStatus, ProficiencyProfile, RawScores,
    ScoreBreakdown, ScoredCandidate,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Candidate age in years
    #[arg(long)]
    pub(crate) age: u32,
    /// Education tier (key such as `bachelors`, or the 1-8 menu number)
    #[arg(long)]
    pub(crate) education: EducationLevel,
    /// Marital status (`single` or `married`)
    #[arg(long, default_value = "single")]
    pub(crate) marital_status: MaritalStatus,
    /// First official language test (ielts, celpip, tef)
    #[arg(long)]
    pub(crate) first_test: LanguageTest,
    /// First language raw scores as speaking,listening,reading,writing
    #[arg(long)]
    pub(crate) first_scores: RawScores,
    /// Second official language test
    #[arg(long, requires = "second_scores")]
    pub(crate) second_test: Option<LanguageTest>,
    /// Second language raw scores as speaking,listening,reading,writing
    #[arg(long, requires = "second_test")]
    pub(crate) second_scores: Option<RawScores>,
    /// Canadian work experience in years (0-5 or 5+)
    #[arg(long, default_value = "0")]
    pub(crate) canadian_experience: ExperienceBucket,
    /// Foreign work experience in years (0-3 or 3+)
    #[arg(long, default_value = "0")]
    pub(crate) foreign_experience: ExperienceBucket,
    /// Candidate holds a provincial nomination
    #[arg(long)]
    pub(crate) nomination: bool,
    /// Candidate holds a qualifying job offer
    #[arg(long)]
    pub(crate) arranged_employment: bool,
    /// Candidate holds a certificate of qualification in a trade
    #[arg(long)]
    pub(crate) certificate: bool,
    /// Candidate has a sibling living in Canada
    #[arg(long)]
    pub(crate) canadian_family: bool,
    /// Canadian study credential (none, secondary, one_or_two_year, three_or_more_year)
    #[arg(long, default_value = "none")]
    pub(crate) canadian_education: CanadianEducation,
    /// Print the normalized profile and breakdown as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn submission(&self) -> CandidateSubmission {
        let second_language = match (self.second_test, self.second_scores) {
            (Some(test), Some(scores)) => Some(LanguageResult { test, scores }),
            _ => None,
        };

        CandidateSubmission {
            age: self.age,
            education: self.education,
            marital_status: self.marital_status,
            first_language: LanguageResult {
                test: self.first_test,
                scores: self.first_scores,
            },
            second_language,
            canadian_experience: self.canadian_experience,
            foreign_experience: self.foreign_experience,
            certificate_of_qualification: self.certificate,
            arranged_employment: self.arranged_employment,
            provincial_nomination: self.nomination,
            canadian_education: self.canadian_education,
            canadian_family: self.canadian_family,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    /// Language test (ielts, celpip, tef)
    #[arg(long)]
    pub(crate) test: LanguageTest,
    /// Raw scores as speaking,listening,reading,writing
    #[arg(long)]
    pub(crate) scores: RawScores,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one candidate per row
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = scoring_service(config.scoring);
    let scored = service.score_submission(args.submission())?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&scored).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    for line in breakdown_lines(&scored.breakdown) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_normalize(args: NormalizeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let levels = scoring_service(config.scoring).normalize(args.test, &args.scores)?;

    println!("{} results on the standard scale", args.test);
    for line in level_lines(&levels) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = scoring_service(config.scoring);
    let scored = CandidateBatchImporter::from_path(&args.input, &service)?;

    println!("Scored {} candidates from {}", scored.len(), args.input.display());
    for line in batch_lines(&scored) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = scoring_service(config.scoring);

    println!("CRS scoring demo");
    println!("Candidate: age 28, bachelor's degree, IELTS 7.0 in every skill, 3 years in Canada");

    let baseline = service.score_submission(demo_submission(false))?;
    println!("\nWithout a provincial nomination");
    println!("  Normalized first language:");
    for line in level_lines(&baseline.profile.first_language) {
        println!("  {line}");
    }
    for line in breakdown_lines(&baseline.breakdown) {
        println!("  {line}");
    }

    let nominated = service.score_submission(demo_submission(true))?;
    println!("\nWith a provincial nomination");
    for line in breakdown_lines(&nominated.breakdown) {
        println!("  {line}");
    }

    println!(
        "\nNomination effect: +{} points",
        nominated.breakdown.total - baseline.breakdown.total
    );
    Ok(())
}

fn demo_submission(provincial_nomination: bool) -> CandidateSubmission {
    CandidateSubmission {
        age: 28,
        education: EducationLevel::Bachelors,
        marital_status: MaritalStatus::Single,
        first_language: LanguageResult {
            test: LanguageTest::Ielts,
            scores: RawScores::uniform(7.0),
        },
        second_language: None,
        canadian_experience: ExperienceBucket::Years(3),
        foreign_experience: ExperienceBucket::Years(0),
        certificate_of_qualification: false,
        arranged_employment: false,
        provincial_nomination,
        canadian_education: CanadianEducation::NoCredential,
        canadian_family: false,
    }
}

fn breakdown_lines(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut lines: Vec<String> = breakdown
        .components
        .iter()
        .map(|component| {
            format!(
                "- {:<32} {:>4}  {}",
                component.category.label(),
                component.points,
                component.notes
            )
        })
        .collect();
    lines.push(format!("Total CRS score: {}", breakdown.total));
    lines
}

fn level_lines(levels: &ProficiencyProfile) -> Vec<String> {
    levels
        .levels()
        .map(|(skill, level)| format!("- {skill}: CLB {level}"))
        .collect()
}

fn batch_lines(scored: &[ScoredCandidate]) -> Vec<String> {
    scored
        .iter()
        .map(|candidate| format!("- {}: {}", candidate.candidate_id, candidate.breakdown.total))
        .collect()
}
