mod command;
mod mutation_operation;
mod payload;
mod project;
mod tenant_id;
