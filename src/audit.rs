use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde_json::Value;
use uuid::Uuid;

use crate::{db::OrmConn, entity::audit_logs::ActiveModel as AuditActive, error::AppResult};

pub async fn log_audit(
    orm: &OrmConn,
    actor: Option<&str>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> AppResult<()> {
    AuditActive {
        id: Set(Uuid::new_v4()),
        actor: Set(actor.map(str::to_string)),
        action: Set(action.to_string()),
        resource: Set(resource.map(str::to_string)),
        metadata: Set(metadata),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;

    Ok(())
}
