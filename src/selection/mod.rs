// Selection of DMR users by region and country codes
//
// criteria.rs turns the user's codes into an effective plan, predicates.rs
// reads prefixes out of DMR IDs, engine.rs applies the plan to the registry.

pub mod criteria;
pub mod engine;
pub mod predicates;

pub use criteria::{
    remove_conjugates, CodeStatus, CriteriaEntry, CriteriaReport, CriterionKind,
    SelectionCriteria, SelectionPlan,
};
pub use engine::{classify, select, Decision, SelectionStats};
