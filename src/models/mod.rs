pub mod card;
pub mod evolution;
pub mod generation;
pub mod list;
pub mod pokemon;
pub mod species;
pub mod type_info;

pub use card::*;
pub use evolution::*;
pub use generation::*;
pub use list::*;
pub use pokemon::*;
pub use species::*;
pub use type_info::*;
