pub mod display;
pub mod telemetry;
pub mod tutor;

pub use tutor::{parse_auction, Tutor, TutorError};
