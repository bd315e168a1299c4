pub mod area;
pub mod bounds;
pub mod simplify;

pub use area::{acres_to_hectares, estimate_acres, spherical_area_m2};
pub use bounds::GeoBounds;
pub use simplify::{epsilon_for_boundary, simplify_boundary};
