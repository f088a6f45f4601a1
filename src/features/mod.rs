pub mod summarize;

pub use summarize::{SummaryOutcome, SummaryService};
