pub mod field_mapper;
