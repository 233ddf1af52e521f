pub mod availability;
pub mod intake;
pub mod rent_gap;
