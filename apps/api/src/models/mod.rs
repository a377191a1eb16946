pub mod career;
pub mod profile;
pub mod project;
pub mod skill;
