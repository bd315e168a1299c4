pub mod fields;

pub use fields::save_field;
