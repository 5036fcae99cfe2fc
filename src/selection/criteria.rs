// Selection criteria and their normalisation
//
// Country codes are signed: +N includes country prefix N, -N excludes it.
// Before selection runs the supplied codes are reduced to an effective plan:
//   1. unknown region codes are dropped
//   2. +N/-N pairs cancel each other
//   3. unknown country prefixes are dropped
//   4. codes already implied by the region selection are pruned as redundant
// Every supplied code ends up in the report with the outcome it received.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::error::{DmrError, Result};
use crate::reference::CodeTables;

use super::predicates::leading_digits;

/// Region and country codes as supplied by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub regions: BTreeSet<i64>,
    pub countries: BTreeSet<i64>,
}

impl SelectionCriteria {
    pub fn new(
        regions: impl IntoIterator<Item = i64>,
        countries: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            countries: countries.into_iter().collect(),
        }
    }

    /// True if no region and no country code was supplied
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.countries.is_empty()
    }
}

/// Remove every `x`/`-x` pair from `codes`, leaving other values in order.
///
/// Each pair removes one occurrence of each value, so applying this twice
/// gives the same result as applying it once.
pub fn remove_conjugates(codes: Vec<i64>) -> Vec<i64> {
    let negatives: Vec<i64> = codes.iter().copied().filter(|c| *c < 0).collect();
    let mut remaining = codes;
    for negative in negatives {
        let Some(positive) = negative.checked_neg() else {
            continue;
        };
        if let Some(pos_idx) = remaining.iter().position(|c| *c == positive) {
            remaining.remove(pos_idx);
            if let Some(neg_idx) = remaining.iter().position(|c| *c == negative) {
                remaining.remove(neg_idx);
            }
        }
    }
    remaining
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    Region,
    Country,
}

/// What happened to a supplied code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStatus {
    /// Used during selection
    Applied,
    /// Already implied by the region selection; reported but inert
    Redundant,
    /// No table entry; reported but inert
    Unknown,
    /// Cancelled by its own negation
    Cancelled,
}

/// One line of the criteria report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaEntry {
    pub kind: CriterionKind,
    pub code: i64,
    pub status: CodeStatus,
    pub name: Option<&'static str>,
}

impl fmt::Display for CriteriaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.unwrap_or("");
        match (self.kind, self.status) {
            (CriterionKind::Region, CodeStatus::Unknown) => {
                write!(f, "-r {} ignore region: (non existant)", self.code)
            }
            (CriterionKind::Region, _) => {
                write!(f, "-r {} include region: {}", self.code, name)
            }
            (CriterionKind::Country, CodeStatus::Unknown) => {
                write!(f, "-c {} ignores country: (non existant)", self.code)
            }
            (CriterionKind::Country, CodeStatus::Cancelled) => {
                write!(f, "-c {} cancelled by -c {}", self.code, -self.code)
            }
            (CriterionKind::Country, status) => {
                let verb = if self.code < 0 { "exclude" } else { "include" };
                write!(f, "-c {} {} country: {}", self.code, verb, name)?;
                if status == CodeStatus::Redundant {
                    write!(f, " (redundant)")?;
                }
                Ok(())
            }
        }
    }
}

/// Outcome of every supplied code, regions first, each group sorted by code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaReport {
    pub entries: Vec<CriteriaEntry>,
}

impl CriteriaReport {
    pub fn status_of(&self, kind: CriterionKind, code: i64) -> Option<CodeStatus> {
        self.entries
            .iter()
            .find(|e| e.kind == kind && e.code == code)
            .map(|e| e.status)
    }

    pub fn with_status(&self, status: CodeStatus) -> impl Iterator<Item = &CriteriaEntry> {
        self.entries.iter().filter(move |e| e.status == status)
    }
}

/// Effective region and country sets used by the selection engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPlan {
    regions: HashSet<i64>,
    countries: HashSet<i64>,
}

impl SelectionPlan {
    /// Build the plan directly from effective sets, bypassing normalisation
    pub fn from_sets(regions: HashSet<i64>, countries: HashSet<i64>) -> Self {
        Self { regions, countries }
    }

    /// Normalise the supplied criteria against the code tables.
    ///
    /// Fails with `EmptyCriteria` only when nothing at all was supplied; a
    /// plan that normalises down to nothing is valid and selects nothing.
    pub fn build(
        criteria: &SelectionCriteria,
        tables: &CodeTables,
    ) -> Result<(Self, CriteriaReport)> {
        if criteria.is_empty() {
            return Err(DmrError::EmptyCriteria);
        }

        let mut plan = SelectionPlan::default();
        let mut report = CriteriaReport::default();

        for &code in &criteria.regions {
            let name = tables.region_name(code);
            let status = if name.is_some() {
                plan.regions.insert(code);
                CodeStatus::Applied
            } else {
                CodeStatus::Unknown
            };
            report.entries.push(CriteriaEntry {
                kind: CriterionKind::Region,
                code,
                status,
                name,
            });
        }

        let survivors: HashSet<i64> =
            remove_conjugates(criteria.countries.iter().copied().collect())
                .into_iter()
                .collect();

        for &code in &criteria.countries {
            let name = tables.country_name(code);
            let status = if !survivors.contains(&code) {
                CodeStatus::Cancelled
            } else if name.is_none() {
                CodeStatus::Unknown
            } else if plan.is_redundant(code) {
                CodeStatus::Redundant
            } else {
                plan.countries.insert(code);
                CodeStatus::Applied
            };
            report.entries.push(CriteriaEntry {
                kind: CriterionKind::Country,
                code,
                status,
                name,
            });
        }

        log::debug!(
            "Selection plan: {} regions, {} country codes applied, {} redundant, {} unknown",
            plan.regions.len(),
            plan.countries.len(),
            report.with_status(CodeStatus::Redundant).count(),
            report.with_status(CodeStatus::Unknown).count()
        );

        Ok((plan, report))
    }

    /// An include code is redundant when its region is already selected; an
    /// exclude code is redundant when its region is not selected.
    fn is_redundant(&self, code: i64) -> bool {
        let region = leading_digits(code.unsigned_abs(), 1) as i64;
        let region_selected = self.regions.contains(&region);
        if code < 0 {
            !region_selected
        } else {
            region_selected
        }
    }

    pub fn regions(&self) -> &HashSet<i64> {
        &self.regions
    }

    pub fn countries(&self) -> &HashSet<i64> {
        &self.countries
    }
}
