pub mod momento_dto;
