use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Request::Id))
                    .col(string(Request::Description))
                    .col(big_integer(Request::RequestorId))
                    .col(date_time(Request::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_requestor_id")
                            .from(Request::Table, Request::RequestorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    #[sea_orm(iden = "requests")]
    Table,
    Id,
    Description,
    RequestorId,
    Created,
}
