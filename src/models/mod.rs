pub mod breach;

pub use breach::{
    BreachRecord, BreachSummaryInput, CheckBreachRequest, CheckBreachResponse, SummarizeRequest,
    SummarizeResponse,
};
