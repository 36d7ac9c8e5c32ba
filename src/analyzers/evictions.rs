//! Eviction filing and judgment outcomes.

use crate::records::EvictionRecord;
use crate::report::{Section, group_thousands};
use crate::stats::{pct, sum_by};

pub struct NeighborhoodRow {
    pub neighborhood: String,
    pub zip_code: String,
    pub filings: u32,
    pub judgments: u32,
    pub approval_rate_pct: f64,
}

pub struct EvictionAnalysis {
    pub total_filings: u32,
    pub total_judgments: u32,
    pub overall_approval_rate_pct: f64,
    /// Rows sorted by filings descending.
    pub rows: Vec<NeighborhoodRow>,
}

impl EvictionAnalysis {
    pub fn from_table(evictions: &[EvictionRecord]) -> Self {
        let total_filings = sum_by(evictions, |e| f64::from(e.eviction_filings)) as u32;
        let total_judgments = sum_by(evictions, |e| f64::from(e.eviction_judgments)) as u32;

        let mut rows: Vec<NeighborhoodRow> = evictions
            .iter()
            .map(|record| NeighborhoodRow {
                neighborhood: record.neighborhood.clone(),
                zip_code: record.zip_code.clone(),
                filings: record.eviction_filings,
                judgments: record.eviction_judgments,
                approval_rate_pct: pct(
                    f64::from(record.eviction_judgments),
                    f64::from(record.eviction_filings),
                ),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.filings
                .cmp(&a.filings)
                .then_with(|| a.neighborhood.cmp(&b.neighborhood))
        });

        Self {
            total_filings,
            total_judgments,
            overall_approval_rate_pct: pct(f64::from(total_judgments), f64::from(total_filings)),
            rows,
        }
    }

    pub fn section(&self) -> Section {
        let mut section = Section::new("EVICTION ANALYSIS");

        section.push(format!(
            "Total Eviction Filings:      {}",
            group_thousands(u64::from(self.total_filings))
        ));
        section.push(format!(
            "Total Eviction Judgments:    {}",
            group_thousands(u64::from(self.total_judgments))
        ));
        section.push(format!(
            "Overall Approval Rate:       {:.1}%",
            self.overall_approval_rate_pct
        ));
        section.push_blank();
        section.push("Evictions by Neighborhood:");
        section.push(format!(
            "{:<20} {:>6} {:>8} {:>10} {:>8}",
            "Neighborhood", "ZIP", "Filings", "Judgments", "Rate"
        ));
        section.push("-".repeat(60));

        for row in &self.rows {
            section.push(format!(
                "{:<20} {:>6} {:>8} {:>10} {:>7.1}%",
                row.neighborhood, row.zip_code, row.filings, row.judgments, row.approval_rate_pct
            ));
        }

        section
    }
}
