pub mod error;
pub mod health {
    pub mod routes;
}
pub mod receipt {
    pub mod dto;
    pub mod error_mapper;
    pub mod image;
    pub mod routes;
}
pub mod tags;
pub mod tip {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
