pub mod command;
pub mod mutation_operation;
pub mod payload;
pub mod project;
pub mod tenant_id;
