// Selection engine
//
// Each record is classified exactly once:
//   - region selected and country not excluded  -> Include
//   - region selected and country excluded      -> Exclude
//   - region not selected and country included  -> Include
//   - otherwise                                  -> NoMatch
// Exclusions only override region inclusion; an include code never
// re-admits a record its region already admitted, so a record can be
// appended at most once.

use crate::registry::DmrUser;

use super::criteria::SelectionPlan;
use super::predicates::{country_exclude_matches, country_include_matches, region_matches};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Include,
    Exclude,
    NoMatch,
}

/// Classify one DMR ID against the plan
pub fn classify(id: u64, plan: &SelectionPlan) -> Decision {
    if region_matches(id, plan.regions()) {
        if country_exclude_matches(id, plan.countries()) {
            Decision::Exclude
        } else {
            Decision::Include
        }
    } else if country_include_matches(id, plan.countries()) {
        Decision::Include
    } else {
        Decision::NoMatch
    }
}

/// Per-decision counts from one selection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    pub included: usize,
    pub excluded: usize,
    pub unmatched: usize,
}

/// Select the users matching `plan`, preserving source order
pub fn select<'a>(
    users: &'a [DmrUser],
    plan: &SelectionPlan,
) -> (Vec<&'a DmrUser>, SelectionStats) {
    let mut selection = Vec::new();
    let mut stats = SelectionStats::default();

    for user in users {
        match classify(user.radio_id, plan) {
            Decision::Include => {
                stats.included += 1;
                selection.push(user);
            }
            Decision::Exclude => stats.excluded += 1,
            Decision::NoMatch => stats.unmatched += 1,
        }
    }

    log::info!(
        "Selected {} of {} DMR IDs ({} excluded by country, {} unmatched)",
        stats.included,
        users.len(),
        stats.excluded,
        stats.unmatched
    );

    (selection, stats)
}
