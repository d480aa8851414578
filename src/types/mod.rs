pub mod parameters;
pub mod period;
pub mod traits;
pub mod variables;
