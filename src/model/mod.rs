pub mod dimensions;
pub mod profile;
pub mod responses;
pub mod scores;
pub mod stats;
