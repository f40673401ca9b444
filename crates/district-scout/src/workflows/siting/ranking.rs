use std::cmp::Reverse;

use serde::Serialize;

use super::domain::DistrictRecord;
use super::locale::DisplayLocale;

/// Scored districts ordered best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedDistricts {
    records: Vec<DistrictRecord>,
}

impl RankedDistricts {
    pub fn records(&self) -> &[DistrictRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DistrictRecord> {
        self.records
    }

    pub fn best(&self) -> Option<&DistrictRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One-line headline naming the top district.
    pub fn banner(&self, locale: DisplayLocale) -> Option<String> {
        self.best()
            .map(|record| banner_text(&record.district, record.score, locale))
    }
}

pub(crate) fn banner_text(district: &str, score: u8, locale: DisplayLocale) -> String {
    match locale {
        DisplayLocale::English => format!("Recommended: {district} — score {score}"),
        DisplayLocale::Russian => format!("Рекомендуем: {district} — индекс {score}"),
    }
}

/// Stable sort by score, highest first. Equal scores keep their input order.
pub fn rank_districts(mut records: Vec<DistrictRecord>) -> RankedDistricts {
    records.sort_by_key(|record| Reverse(record.score));
    RankedDistricts { records }
}
