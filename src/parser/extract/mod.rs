pub mod about;
pub mod education;
pub mod experience;
pub mod featured;
pub mod recommendations;
pub mod skills;
pub mod top_card;
