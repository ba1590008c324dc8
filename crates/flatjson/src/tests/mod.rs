mod events_bad;
pub mod utils;
