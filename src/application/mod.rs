mod layout;
mod session;

pub use layout::CellLayout;
pub use session::{Event, MAX_SPEED, MIN_SPEED, SPEED_STEP, Session, snap_speed};
