mod error;
mod parsing;
mod types;


pub use error::MapError;
pub use parsing::{parse_crew, parse_pass_time, parse_position};
pub use types::{CrewMember, GeoPosition, PassPrediction};
