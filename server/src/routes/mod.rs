pub mod cpi;
pub mod sales;
