pub mod currency_pair;
pub mod fx_error;
pub mod fx_triangulation;
pub mod shared_fx_triangulation;
