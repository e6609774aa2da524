pub mod geo_point;
pub mod resolution;
pub mod station;
pub mod temperature;
