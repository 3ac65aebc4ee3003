use crate::error::RecordsResult;
use serde::Deserialize;
use sqlx::SqliteConnection;

pub mod student;

#[derive(Deserialize)]
pub struct IdPath {
    pub id: i64,
}

pub trait DataType: Sized {
    type Id;
    type FormForAdding;

    async fn get_from_db_by_id(id: Self::Id, conn: &mut SqliteConnection) -> RecordsResult<Option<Self>>;
    async fn get_all(conn: &mut SqliteConnection) -> RecordsResult<Vec<Self>>;
    async fn insert_into_database(to_be_added: Self::FormForAdding, conn: &mut SqliteConnection) -> RecordsResult<Self::Id>;
    async fn remove_from_database(id: Self::Id, conn: &mut SqliteConnection) -> RecordsResult<bool>;
}
