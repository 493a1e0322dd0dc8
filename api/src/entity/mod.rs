pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod vehiculo;
