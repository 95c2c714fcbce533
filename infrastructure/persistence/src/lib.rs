pub mod db;
pub mod json_slot;
pub mod keys;
pub mod kv;
pub mod memory;
pub mod postgres;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod favorite {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod session {
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
