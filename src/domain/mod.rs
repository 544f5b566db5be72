pub mod comparison;
pub mod result_point;
pub mod series;
pub mod study;
