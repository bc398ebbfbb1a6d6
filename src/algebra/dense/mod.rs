mod types;
pub use self::types::*;
mod views;
pub use self::views::*;
