pub mod ranking_request;
pub mod ranking_response;

pub use ranking_request::RankingQuery;
pub use ranking_response::{RankedCandidateDto, RankingResponse};
