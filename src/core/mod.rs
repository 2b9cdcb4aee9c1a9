pub mod celebration;
pub mod geometry;
pub mod messages;
pub mod particles;

pub use celebration::*;
pub use geometry::*;
pub use messages::*;
pub use particles::*;
