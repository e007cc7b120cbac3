pub mod nearest_neighbour;
pub mod solve;
pub mod two_opt;

pub use nearest_neighbour::*;
pub use solve::*;
pub use two_opt::*;
