use crate::infra::interrupt_signal;
use clap::Args;
use district_scout::config::AppConfig;
use district_scout::error::AppError;
use district_scout::workflows::siting::{
    validate, AnalysisError, AnalysisReport, DisplayLocale, FormInput, RandomAnalysisService,
    ValidationResult,
};
use std::path::PathBuf;

const DEMO_SEED: u64 = 42;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// City the districts belong to
    #[arg(long, default_value = "")]
    pub(crate) city: String,
    /// Priority to weigh (repeatable)
    #[arg(long = "priority")]
    pub(crate) priorities: Vec<String>,
    /// Minimum premises area in square meters
    #[arg(long, default_value = "")]
    pub(crate) min_area: String,
    /// Maximum premises area in square meters
    #[arg(long, default_value = "")]
    pub(crate) max_area: String,
    /// Maximum monthly rent per square meter
    #[arg(long, default_value = "")]
    pub(crate) max_rent: String,
    /// Target average check (100-5000)
    #[arg(long, default_value = "")]
    pub(crate) avg_check: String,
    /// Business category, e.g. "coffee shop" or "pharmacy"
    #[arg(long, default_value = "")]
    pub(crate) business_type: String,
    /// Candidate district (repeatable)
    #[arg(long = "district")]
    pub(crate) districts: Vec<String>,
    /// File with one candidate district per line, appended after --district values
    #[arg(long)]
    pub(crate) districts_file: Option<PathBuf>,
    /// Display language of messages and labels (en, ru)
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Seed for reproducible district metrics
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the simulated processing delay
    #[arg(long)]
    pub(crate) no_delay: bool,
    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

impl AnalyzeArgs {
    pub(crate) fn form(&self) -> Result<FormInput, AppError> {
        let mut lines = self.districts.clone();
        if let Some(path) = &self.districts_file {
            let contents = std::fs::read_to_string(path)?;
            lines.extend(contents.lines().map(str::to_string));
        }

        Ok(FormInput {
            city: self.city.clone(),
            priorities: self.priorities.iter().cloned().collect(),
            min_area: self.min_area.clone(),
            max_area: self.max_area.clone(),
            max_rent: self.max_rent.clone(),
            avg_check: self.avg_check.clone(),
            business_type: self.business_type.clone(),
            districts: lines.join("\n"),
        })
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Display language of messages and labels (en, ru)
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Seed for the demo draws (defaults to a fixed seed)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(locale) = &args.locale {
        config.analysis.locale = DisplayLocale::from_str(locale);
    }
    if args.seed.is_some() {
        config.analysis.seed = args.seed;
    }
    if args.no_delay {
        config.analysis.latency_ms = 0;
    }

    let form = args.form()?;
    let service = RandomAnalysisService::from_config(&config.analysis);

    let report = match service
        .analyze_with_latency(&form, interrupt_signal())
        .await
    {
        Ok(report) => report,
        Err(err) => {
            if let AnalysisError::Invalid(errors) = &err {
                for (field, message) in errors.messages(service.locale()) {
                    eprintln!("{field}: {message}");
                }
            }
            return Err(err.into());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let locale = args
        .locale
        .as_deref()
        .map(DisplayLocale::from_str)
        .unwrap_or_default();
    let mut config = AppConfig::load()?;
    config.analysis.locale = locale;
    config.analysis.seed = Some(args.seed.unwrap_or(DEMO_SEED));
    config.analysis.latency_ms = 0;

    println!("District scout demo");

    let mut rejected = demo_form();
    rejected.min_area = "150".to_string();
    rejected.max_area = "60".to_string();
    rejected.avg_check = "50".to_string();
    println!("\nSubmission with inverted area bounds and a low average check:");
    if let ValidationResult::Invalid(errors) = validate(&rejected) {
        for (field, message) in errors.messages(locale) {
            println!("- {field}: {message}");
        }
    }

    let service = RandomAnalysisService::from_config(&config.analysis);
    let report = service
        .analyze_with_latency(&demo_form(), interrupt_signal())
        .await?;
    println!(
        "\nCorrected submission for {} ({}):",
        report.city,
        report.business_type.label(locale)
    );
    print!("{}", render_report(&report));
    Ok(())
}

fn render_report(report: &AnalysisReport) -> String {
    let mut output = report.render_table();
    if report.rows.is_empty() {
        output.push_str("no districts scored\n");
    }
    output
}

fn demo_form() -> FormInput {
    FormInput {
        city: "Moscow".to_string(),
        priorities: ["traffic", "competition"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        min_area: "40".to_string(),
        max_area: "120".to_string(),
        max_rent: "3500".to_string(),
        avg_check: "350".to_string(),
        business_type: "coffee shop".to_string(),
        districts: "Arbat\nTverskoy\nBasmanny\nKhamovniki\nPresnensky".to_string(),
    }
}
