pub mod error;
pub mod locale;
pub mod money;
pub mod tags;
pub mod auth {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod checkout {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod favorite {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod order {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod profile {
    pub mod dto;
    pub mod routes;
}
