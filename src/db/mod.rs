//! Persistence module split across logical submodules.

mod connection;
mod pets;

pub use connection::{open_database, open_in_memory};
pub use pets::{
    delete_all_pets, delete_pet, fetch_pet, fetch_pet_summaries, fetch_pets, insert_pet,
    update_pets,
};
