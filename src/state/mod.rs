mod library;

pub use library::{PlanLibrary, FUZZY_MATCH_THRESHOLD};
