pub mod algorithms;
pub mod pipeline;
pub mod session;

pub use pipeline::also_likes::{DocumentPopularity, LikesRanking, PairCount};
pub use pipeline::geo::CountryResolution;
pub use session::AnalysisSession;
