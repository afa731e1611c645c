pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::command::{
    Command, CreateProjectInput, DeleteProjectInput, SetProjectDescriptionInput,
    SetProjectNameInput,
};
pub use models::mutation_operation::MutationOperation;
pub use models::payload::{MutationPayload, ProjectIdPayload, SuccessPayload};
pub use models::project::Project;
pub use models::tenant_id::TenantId;
