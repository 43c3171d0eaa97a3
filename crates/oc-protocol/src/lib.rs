pub mod catalog;
pub mod suggestion;
pub mod turn;

pub use catalog::*;
pub use suggestion::*;
pub use turn::*;
