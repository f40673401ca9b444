use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{BusinessType, FormInput};
use super::locale::DisplayLocale;

pub const MIN_AVG_CHECK: i64 = 100;
pub const MAX_AVG_CHECK: i64 = 5000;

/// Error slot on the form. Both area inputs report into `Area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    City,
    Priorities,
    Area,
    MaxRent,
    AvgCheck,
    BusinessType,
    Districts,
}

impl FormField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Priorities => "priorities",
            Self::Area => "area",
            Self::MaxRent => "max_rent",
            Self::AvgCheck => "avg_check",
            Self::BusinessType => "business_type",
            Self::Districts => "districts",
        }
    }
}

/// A single failed form rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    MissingCity,
    MissingPriority,
    InvalidArea,
    AreaOrder,
    InvalidRent,
    AvgCheckOutOfRange,
    MissingBusinessType,
    MissingDistrict,
}

impl ValidationIssue {
    pub const fn field(self) -> FormField {
        match self {
            Self::MissingCity => FormField::City,
            Self::MissingPriority => FormField::Priorities,
            Self::InvalidArea | Self::AreaOrder => FormField::Area,
            Self::InvalidRent => FormField::MaxRent,
            Self::AvgCheckOutOfRange => FormField::AvgCheck,
            Self::MissingBusinessType => FormField::BusinessType,
            Self::MissingDistrict => FormField::Districts,
        }
    }

    pub const fn message(self, locale: DisplayLocale) -> &'static str {
        match locale {
            DisplayLocale::English => match self {
                Self::MissingCity => "select a city",
                Self::MissingPriority => "select at least one priority",
                Self::InvalidArea => "enter valid area values",
                Self::AreaOrder => "minimum area cannot exceed maximum area",
                Self::InvalidRent => "enter a valid rent value",
                Self::AvgCheckOutOfRange => "average check must be between 100 and 5000",
                Self::MissingBusinessType => "select a business type",
                Self::MissingDistrict => "enter at least one district",
            },
            DisplayLocale::Russian => match self {
                Self::MissingCity => "Выберите город",
                Self::MissingPriority => "Выберите хотя бы один приоритет",
                Self::InvalidArea => "Введите корректные значения территории",
                Self::AreaOrder => "Минимальная территория не может быть больше максимальной",
                Self::InvalidRent => "Введите корректную стоимость аренды",
                Self::AvgCheckOutOfRange => "Средний чек должен быть от 100 до 5000 ₽",
                Self::MissingBusinessType => "Выберите тип бизнеса",
                Self::MissingDistrict => "Введите хотя бы один район",
            },
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(DisplayLocale::English))
    }
}

/// Every failing field of a submission, at most one issue per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, ValidationIssue>);

impl FieldErrors {
    pub fn record(&mut self, issue: ValidationIssue) {
        self.0.insert(issue.field(), issue);
    }

    pub fn get(&self, field: FormField) -> Option<ValidationIssue> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.get(issue.field()) == Some(issue)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationIssue)> + '_ {
        self.0.iter().map(|(field, issue)| (*field, *issue))
    }

    /// Field key to display message, ready for per-field error slots.
    pub fn messages(&self, locale: DisplayLocale) -> BTreeMap<&'static str, &'static str> {
        self.iter()
            .map(|(field, issue)| (field.key(), issue.message(locale)))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .iter()
            .map(|(field, issue)| format!("{}: {}", field.key(), issue))
            .collect::<Vec<_>>();
        write!(f, "{}", rendered.join("; "))
    }
}

/// Outcome of checking a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Empty for a valid submission.
    pub fn errors(&self) -> FieldErrors {
        match self {
            Self::Valid => FieldErrors::default(),
            Self::Invalid(errors) => errors.clone(),
        }
    }

    pub fn messages(&self, locale: DisplayLocale) -> BTreeMap<&'static str, &'static str> {
        match self {
            Self::Valid => BTreeMap::new(),
            Self::Invalid(errors) => errors.messages(locale),
        }
    }
}

/// Runs every form rule and reports all failures together.
pub fn validate(form: &FormInput) -> ValidationResult {
    let errors = collect_issues(form);
    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

fn collect_issues(form: &FormInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.city.trim().is_empty() {
        errors.record(ValidationIssue::MissingCity);
    }

    if form.priorities.is_empty() {
        errors.record(ValidationIssue::MissingPriority);
    }

    match (
        parse_positive_int(&form.min_area),
        parse_positive_int(&form.max_area),
    ) {
        (Some(min_area), Some(max_area)) if min_area > max_area => {
            errors.record(ValidationIssue::AreaOrder);
        }
        (Some(_), Some(_)) => {}
        _ => errors.record(ValidationIssue::InvalidArea),
    }

    if parse_positive_number(&form.max_rent).is_none() {
        errors.record(ValidationIssue::InvalidRent);
    }

    if parse_avg_check(&form.avg_check).is_none() {
        errors.record(ValidationIssue::AvgCheckOutOfRange);
    }

    if form.business_type.trim().is_empty() {
        errors.record(ValidationIssue::MissingBusinessType);
    }

    if form.districts.trim().is_empty() {
        errors.record(ValidationIssue::MissingDistrict);
    }

    errors
}

fn parse_positive_int(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| *value > 0)
        .and_then(|value| u32::try_from(value).ok())
}

fn parse_positive_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

fn parse_avg_check(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| (MIN_AVG_CHECK..=MAX_AVG_CHECK).contains(value))
        .map(|value| value as u32)
}

/// Typed criteria extracted from a submission that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteCriteria {
    pub city: String,
    pub priorities: BTreeSet<String>,
    pub min_area: u32,
    pub max_area: u32,
    pub max_rent: f64,
    pub avg_check: u32,
    pub business_type: BusinessType,
    pub districts: Vec<String>,
}

impl SiteCriteria {
    pub fn from_form(form: &FormInput) -> Result<Self, FieldErrors> {
        let errors = collect_issues(form);
        if !errors.is_empty() {
            return Err(errors);
        }

        match (
            parse_positive_int(&form.min_area),
            parse_positive_int(&form.max_area),
            parse_positive_number(&form.max_rent),
            parse_avg_check(&form.avg_check),
        ) {
            (Some(min_area), Some(max_area), Some(max_rent), Some(avg_check)) => Ok(Self {
                city: form.city.trim().to_string(),
                priorities: form.priorities.clone(),
                min_area,
                max_area,
                max_rent,
                avg_check,
                business_type: BusinessType::parse(&form.business_type),
                districts: form.district_names(),
            }),
            _ => Err(errors),
        }
    }
}
