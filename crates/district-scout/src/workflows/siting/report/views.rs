use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{BusinessType, DistrictRecord};
use super::super::locale::{format_thousands, DisplayLocale};
use super::super::ranking::{banner_text, RankedDistricts};
use super::super::validation::SiteCriteria;

/// Render-ready table row for one district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictRowView {
    pub rank: usize,
    pub district: String,
    pub traffic_value: f64,
    pub traffic_label: &'static str,
    pub traffic_class: &'static str,
    pub competitors: u8,
    pub competition_label: &'static str,
    pub competition_class: &'static str,
    pub rent: u32,
    pub rent_display: String,
    pub area_avg_check: u32,
    pub area_avg_check_display: String,
    pub score: u8,
    pub score_class: &'static str,
    pub recommendation_label: &'static str,
    pub recommendation_class: &'static str,
}

impl DistrictRowView {
    pub fn from_record(rank: usize, record: &DistrictRecord, locale: DisplayLocale) -> Self {
        Self {
            rank,
            district: record.district.clone(),
            traffic_value: record.traffic_value,
            traffic_label: record.traffic_level.label(locale),
            traffic_class: record.traffic_level.css_class(),
            competitors: record.competitor_count,
            competition_label: record.competition.label(locale),
            competition_class: record.competition.css_class(),
            rent: record.rent,
            rent_display: format_thousands(record.rent, locale),
            area_avg_check: record.area_avg_check,
            area_avg_check_display: format_thousands(record.area_avg_check, locale),
            score: record.score,
            score_class: record.recommendation.score_class(),
            recommendation_label: record.recommendation.label(locale),
            recommendation_class: record.recommendation.css_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestDistrictView {
    pub district: String,
    pub score: u8,
    pub headline: String,
}

/// Full response for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub city: String,
    pub business_type: BusinessType,
    pub priorities: BTreeSet<String>,
    pub locale: DisplayLocale,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<DistrictRowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<BestDistrictView>,
    /// One-line recommendation naming the top district.
    pub banner: Option<String>,
}

impl AnalysisReport {
    pub fn build(criteria: &SiteCriteria, ranked: &RankedDistricts, locale: DisplayLocale) -> Self {
        let rows = ranked
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| DistrictRowView::from_record(index + 1, record, locale))
            .collect();

        let best = ranked.best().map(|record| BestDistrictView {
            district: record.district.clone(),
            score: record.score,
            headline: banner_text(&record.district, record.score, locale),
        });

        let banner = best.as_ref().map(|best| best.headline.clone());

        Self {
            city: criteria.city.clone(),
            business_type: criteria.business_type.clone(),
            priorities: criteria.priorities.clone(),
            locale,
            generated_at: Utc::now(),
            rows,
            best,
            banner,
        }
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Plain-text table for terminals.
    pub fn render_table(&self) -> String {
        let headers = match self.locale {
            DisplayLocale::English => [
                "#",
                "District",
                "Traffic",
                "Competitors",
                "Rent",
                "Area avg check",
                "Score",
                "Recommendation",
            ],
            DisplayLocale::Russian => [
                "#",
                "Район",
                "Проходимость",
                "Конкуренты",
                "Аренда",
                "Средний чек района",
                "Индекс",
                "Рекомендация",
            ],
        };

        let body: Vec<[String; 8]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.rank.to_string(),
                    row.district.clone(),
                    row.traffic_label.to_string(),
                    row.competitors.to_string(),
                    row.rent_display.clone(),
                    row.area_avg_check_display.clone(),
                    row.score.to_string(),
                    row.recommendation_label.to_string(),
                ]
            })
            .collect();

        let mut widths = headers.map(|header| header.chars().count());
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        push_line(&mut output, headers.iter().copied(), &widths);
        for cells in &body {
            push_line(&mut output, cells.iter().map(String::as_str), &widths);
        }
        if let Some(banner) = self.banner() {
            output.push('\n');
            output.push_str(banner);
            output.push('\n');
        }
        output
    }
}

fn push_line<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    output.push_str(line.trim_end());
    output.push('\n');
}
