mod company;
mod shared;

pub use company::Company;
pub use shared::entity::{Entity, InvalidIDError, ID};
