use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::modules::content::application::ports::outgoing::{
    ContentStore, ContentStoreError, StoredDocument,
};
use crate::modules::content::domain::document::SectionKind;

use super::sea_orm_entity::{
    ActiveModel as DocActiveModel, Column as DocColumn, Entity as DocEntity,
};

/// Postgres-backed content store.
///
/// The revision check rides on the UPDATE itself (`WHERE kind = ? AND
/// revision = ?`), so two concurrent commits cannot both succeed; the
/// loser sees zero affected rows and gets a conflict.
#[derive(Debug, Clone)]
pub struct ContentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(msg: &str) -> bool {
    let m = msg.to_lowercase();
    m.contains("duplicate key") || m.contains("unique constraint") || m.contains("23505")
}

#[async_trait]
impl ContentStore for ContentStorePostgres {
    async fn get(&self, kind: SectionKind) -> Result<Option<StoredDocument>, ContentStoreError> {
        let row = DocEntity::find_by_id(kind.as_str())
            .one(&*self.db)
            .await
            .map_err(|err| ContentStoreError::Backend(err.to_string()))?;

        Ok(row.map(|model| StoredDocument {
            body: model.body,
            revision: model.revision,
        }))
    }

    async fn set(
        &self,
        kind: SectionKind,
        body: JsonValue,
        expected_revision: Option<i64>,
    ) -> Result<i64, ContentStoreError> {
        match expected_revision {
            Some(expected) => {
                let next = expected + 1;
                let result = DocEntity::update_many()
                    .col_expr(DocColumn::Body, Expr::value(body))
                    .col_expr(DocColumn::Revision, Expr::value(next))
                    .col_expr(
                        DocColumn::UpdatedAt,
                        Expr::value(chrono::Utc::now()),
                    )
                    .filter(DocColumn::Kind.eq(kind.as_str()))
                    .filter(DocColumn::Revision.eq(expected))
                    .exec(&*self.db)
                    .await
                    .map_err(|err| ContentStoreError::Backend(err.to_string()))?;

                if result.rows_affected == 0 {
                    // Row gone or revision moved on; either way the
                    // caller's view is stale.
                    return Err(ContentStoreError::RevisionConflict);
                }
                Ok(next)
            }
            None => {
                let row = DocActiveModel {
                    kind: Set(kind.as_str().to_string()),
                    body: Set(body),
                    revision: Set(1),
                    updated_at: Set(chrono::Utc::now().into()),
                };

                DocEntity::insert(row)
                    .exec(&*self.db)
                    .await
                    .map_err(|err| {
                        let msg = err.to_string();
                        if is_unique_violation(&msg) {
                            ContentStoreError::RevisionConflict
                        } else {
                            ContentStoreError::Backend(msg)
                        }
                    })?;

                Ok(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::sea_orm_entity::Model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn stored_row(revision: i64) -> Model {
        Model {
            kind: "hero".to_string(),
            body: json!({ "name": "Ada" }),
            revision,
            updated_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_get_maps_row_to_stored_document() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_row(4)]])
            .into_connection();

        let store = ContentStorePostgres::new(Arc::new(db));
        let doc = store.get(SectionKind::Hero).await.unwrap().unwrap();

        assert_eq!(doc.revision, 4);
        assert_eq!(doc.body, json!({ "name": "Ada" }));
    }

    #[tokio::test]
    async fn test_get_missing_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let store = ContentStorePostgres::new(Arc::new(db));
        assert_eq!(store.get(SectionKind::Projects).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_with_matching_revision_bumps_it() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = ContentStorePostgres::new(Arc::new(db));
        let rev = store
            .set(SectionKind::Hero, json!({ "name": "Ada" }), Some(4))
            .await
            .unwrap();

        assert_eq!(rev, 5);
    }

    #[tokio::test]
    async fn test_set_with_stale_revision_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = ContentStorePostgres::new(Arc::new(db));
        let err = store
            .set(SectionKind::Hero, json!({}), Some(3))
            .await
            .unwrap_err();

        assert_eq!(err, ContentStoreError::RevisionConflict);
    }

    #[test]
    fn test_unique_violation_detection() {
        assert!(is_unique_violation(
            "error returned from database: duplicate key value violates unique constraint"
        ));
        assert!(!is_unique_violation("connection refused"));
    }
}
