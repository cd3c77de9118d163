//! # Content Documents Table Migration
//!
//! One row per portfolio section (hero, experience, certifications,
//! projects, tech-stack, testimonials, network, quick-nav). The section
//! document itself is a single jsonb blob: sections are independent, are
//! read and written wholesale, and carry no cross-section references, so
//! a per-field relational layout would only add churn every time a
//! section gains a field.
//!
//! `revision` is the optimistic-concurrency token. Every commit must name
//! the revision it was loaded against; the update only lands if the row
//! still carries that revision. This turns the two-admins-editing race
//! into a visible conflict instead of a silent lost update.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentDocuments::Kind)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContentDocuments::Body)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContentDocuments::Revision)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ContentDocuments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContentDocuments {
    Table,
    Kind,
    Body,
    Revision,
    UpdatedAt,
}
