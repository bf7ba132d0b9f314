pub mod event;
pub mod profile;
pub mod registration;
pub mod team_member;
