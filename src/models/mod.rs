pub mod place;
pub mod popular;
