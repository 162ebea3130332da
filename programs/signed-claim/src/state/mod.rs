pub mod global_state;
pub mod user_state;

pub use global_state::*;
pub use user_state::*;
