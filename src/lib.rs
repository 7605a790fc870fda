pub mod color;
pub mod dashboard;
pub mod encode;
pub mod error;
pub mod filter;
pub mod layer;
pub mod load;
pub mod location;
pub mod station;
pub mod summary;
pub mod view;
