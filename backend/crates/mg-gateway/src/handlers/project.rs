//! Handlers for the four project mutations.
//!
//! Not-found is data: delete reports `success: false` and the setters
//! report an absent id. A project outside the request's tenant scope is
//! indistinguishable from one that does not exist.

use crate::{
    GatewayError, HandlerContext, KeyClaim, RequestLogger, Result as GatewayErrorResult,
    claim_idempotency, release_idempotency, sanitize_description, sanitize_string,
    store_idempotency,
};

use mg_core::{
    CreateProjectInput, DeleteProjectInput, MutationOperation, MutationPayload,
    ProjectIdPayload, SetProjectDescriptionInput, SetProjectNameInput, SuccessPayload,
};
use mg_db::{IdempotencyRepository, ProjectStore};

use uuid::Uuid;

/// Handle create_project
pub async fn handle_create<S: ProjectStore>(
    input: CreateProjectInput,
    ctx: &HandlerContext<S>,
) -> GatewayErrorResult<MutationPayload> {
    // 1. Tenant scope
    if !ctx.request_ctx.permits(input.tenant_id) {
        return Err(GatewayError::validation(
            "tenant_id is outside the request's tenant scope",
            "tenant_id",
        ));
    }

    // 2. Replay a finished create or claim the key for this one
    let claim = match (&ctx.idempotency, replay_key(ctx, &input)) {
        (Some(repo), Some(key)) => {
            match claim_idempotency(repo, &key, MutationOperation::CreateProject.as_str()).await? {
                KeyClaim::Replay(cached) => {
                    RequestLogger::new(&ctx.request_ctx)
                        .info("Returning cached idempotent response");
                    ctx.metrics.idempotent_replay();
                    let payload: ProjectIdPayload =
                        serde_json::from_str(&cached).map_err(|e| {
                            GatewayError::internal(format!(
                                "Failed to decode cached response: {e}"
                            ))
                        })?;
                    return Ok(payload.into());
                }
                KeyClaim::Claimed => Some((repo, key)),
            }
        }
        _ => None,
    };

    // 3. Create in store
    let name = sanitize_string(&input.name);
    let description = sanitize_description(input.description.as_deref());
    let id = match ctx.store.create(input.tenant_id, name, description).await {
        Ok(id) => id,
        Err(e) => {
            if let Some((repo, key)) = &claim {
                release_claim(ctx, repo, key).await;
            }
            return Err(e.into());
        }
    };

    RequestLogger::new(&ctx.request_ctx)
        .info(&format!("Created project {} for tenant {}", id, input.tenant_id));

    let payload = ProjectIdPayload::found(id);

    // 4. Complete the claim (after commit, failure here is non-fatal)
    if let Some((repo, key)) = &claim {
        let logger = RequestLogger::new(&ctx.request_ctx);
        match serde_json::to_string(&payload) {
            Ok(json) => {
                if let Err(e) = store_idempotency(repo, key, &json).await {
                    logger.warn(&format!("Failed to store idempotency: {e}"));
                }
            }
            Err(e) => {
                logger.warn(&format!("Failed to encode idempotent response: {e}"));
                release_claim(ctx, repo, key).await;
            }
        }
    }

    Ok(payload.into())
}

/// Handle delete_project
pub async fn handle_delete<S: ProjectStore>(
    input: DeleteProjectInput,
    ctx: &HandlerContext<S>,
) -> GatewayErrorResult<MutationPayload> {
    if !in_scope(ctx, input.project_id).await? {
        return Ok(SuccessPayload::from(false).into());
    }

    let deleted = ctx.store.delete(input.project_id).await?;
    if deleted {
        RequestLogger::new(&ctx.request_ctx)
            .info(&format!("Deleted project {}", input.project_id));
    }

    Ok(SuccessPayload::from(deleted).into())
}

/// Handle set_project_name
pub async fn handle_set_name<S: ProjectStore>(
    input: SetProjectNameInput,
    ctx: &HandlerContext<S>,
) -> GatewayErrorResult<MutationPayload> {
    if !in_scope(ctx, input.project_id).await? {
        return Ok(ProjectIdPayload::absent().into());
    }

    let id = ctx
        .store
        .rename(input.project_id, sanitize_string(&input.name))
        .await?;

    Ok(ProjectIdPayload::from(id).into())
}

/// Handle set_project_description. An absent or blank description clears it.
pub async fn handle_set_description<S: ProjectStore>(
    input: SetProjectDescriptionInput,
    ctx: &HandlerContext<S>,
) -> GatewayErrorResult<MutationPayload> {
    if !in_scope(ctx, input.project_id).await? {
        return Ok(ProjectIdPayload::absent().into());
    }

    let id = ctx
        .store
        .redescribe(
            input.project_id,
            sanitize_description(input.description.as_deref()),
        )
        .await?;

    Ok(ProjectIdPayload::from(id).into())
}

/// Whether the request may touch `project_id`. Unscoped requests skip the
/// lookup; a missing project is reported as in scope so the store decides
/// not-found. `tenant_id` never changes, so the answer cannot go stale
/// between this check and the write.
async fn in_scope<S: ProjectStore>(
    ctx: &HandlerContext<S>,
    project_id: Uuid,
) -> GatewayErrorResult<bool> {
    let Some(scope) = ctx.request_ctx.tenant_scope else {
        return Ok(true);
    };

    let allowed = match ctx.store.find_by_id(project_id).await? {
        Some(project) => project.is_owned_by(scope),
        None => true,
    };

    if !allowed {
        RequestLogger::new(&ctx.request_ctx).debug(&format!(
            "Project {} is outside tenant scope, treating as not found",
            project_id
        ));
    }

    Ok(allowed)
}

async fn release_claim<S: ProjectStore>(
    ctx: &HandlerContext<S>,
    repo: &IdempotencyRepository,
    key: &str,
) {
    if let Err(e) = release_idempotency(repo, key).await {
        RequestLogger::new(&ctx.request_ctx)
            .warn(&format!("Failed to release idempotency key: {e}"));
    }
}

/// Keys are namespaced by tenant so one tenant can never replay another's create.
fn replay_key<S: ProjectStore>(
    ctx: &HandlerContext<S>,
    input: &CreateProjectInput,
) -> Option<String> {
    ctx.request_ctx
        .idempotency_key
        .as_ref()
        .map(|key| format!("{}:{}", input.tenant_id, key))
}
