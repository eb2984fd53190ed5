use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per singleton document: profile, about, experience, skills, certifications
        manager
            .create_table(
                Table::create()
                    .table(ContentDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentDocuments::Key)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContentDocuments::Data)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContentDocuments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_content_documents_updated_at
                BEFORE UPDATE ON content_documents
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_content_documents_updated_at ON content_documents;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContentDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContentDocuments {
    Table,
    Key,
    Data,
    UpdatedAt,
}
