pub mod calibrator;
pub mod density;
pub mod environment;
pub mod user_agent;

pub use calibrator::{parse_leading_number, CalibrationMethod, Calibrator, Event, Outcome, Snapshot};
pub use density::{compute_density, derive_dpi, measure};
pub use environment::{read_screen_info, FixedScreen, HostInfo};
pub use user_agent::{detect_browser, detect_os};
