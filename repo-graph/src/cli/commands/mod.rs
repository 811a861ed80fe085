// Command implementations

pub mod ask;
pub mod fetch;
pub mod inspect;
