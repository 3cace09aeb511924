//! Value objects - Immutable objects defined by their attributes

mod ids;
mod rank;
mod room_type;
mod schedule;

pub use ids::*;
pub use rank::Rank;
pub use room_type::RoomType;
pub use schedule::{format_scheduled_time, parse_scheduled_time, ScheduledTime};
