pub mod clock;
pub mod event;
pub mod query;
pub mod validation;

pub use clock::{Clock, FixedClock, LocalClock};
pub use event::{Event, EventId, NewEvent};
pub use query::{filter_by_range, filter_today, DateRange};
pub use validation::{EventFields, RangeParams, ValidationError};
