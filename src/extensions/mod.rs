pub mod date_time_ext;
pub mod float_ext;
