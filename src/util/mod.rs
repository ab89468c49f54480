pub mod assets;
pub mod ids;
pub mod logging;
pub mod number;
pub mod persistence;
pub mod version;

pub use ids::generate_id;
