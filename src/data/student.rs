use crate::{
    data::DataType,
    error::{MakeQuerySnafu, MissingFormFieldSnafu, RecordsError, RecordsResult},
};
use snafu::{OptionExt, ResultExt};
use sqlx::{FromRow, SqliteConnection};

pub const COURSE_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub gender: String,
    pub courses: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudent {
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub gender: String,
    /// Selected courses, in the order they were submitted.
    pub courses: Vec<String>,
}

impl AddStudent {
    pub fn joined_courses(&self) -> String {
        self.courses.join(COURSE_SEPARATOR)
    }
}

/// Builds a new student out of raw form pairs.
///
/// `courses` may repeat and keeps its order. For every other field the first occurrence wins, and
/// a field that never shows up is an error rather than an empty string.
impl TryFrom<Vec<(String, String)>> for AddStudent {
    type Error = RecordsError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        let mut first_name = None;
        let mut last_name = None;
        let mut id_number = None;
        let mut gender = None;
        let mut courses = vec![];

        for (key, value) in pairs {
            match key.as_str() {
                "first_name" => {
                    first_name.get_or_insert(value);
                }
                "last_name" => {
                    last_name.get_or_insert(value);
                }
                "id_number" => {
                    id_number.get_or_insert(value);
                }
                "gender" => {
                    gender.get_or_insert(value);
                }
                "courses" => courses.push(value),
                _ => {}
            }
        }

        Ok(Self {
            first_name: first_name.context(MissingFormFieldSnafu { name: "first_name" })?,
            last_name: last_name.context(MissingFormFieldSnafu { name: "last_name" })?,
            id_number: id_number.context(MissingFormFieldSnafu { name: "id_number" })?,
            gender: gender.context(MissingFormFieldSnafu { name: "gender" })?,
            courses,
        })
    }
}

impl Student {
    pub async fn ensure_schema(conn: &mut SqliteConnection) -> RecordsResult<()> {
        sqlx::query("CREATE TABLE IF NOT EXISTS students (id INTEGER PRIMARY KEY, first_name TEXT, last_name TEXT, id_number TEXT, gender TEXT, courses TEXT)")
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}

impl DataType for Student {
    type Id = i64;
    type FormForAdding = AddStudent;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RecordsResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_all(conn: &mut SqliteConnection) -> RecordsResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM students")
            .fetch_all(conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RecordsResult<Self::Id> {
        let courses = to_be_added.joined_courses();
        let AddStudent {
            first_name,
            last_name,
            id_number,
            gender,
            courses: _,
        } = to_be_added;

        Ok(sqlx::query("INSERT INTO students (first_name, last_name, id_number, gender, courses) VALUES (?, ?, ?, ?, ?)")
            .bind(first_name)
            .bind(last_name)
            .bind(id_number)
            .bind(gender)
            .bind(courses)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?
            .last_insert_rowid())
    }

    /// Returns whether a row was actually removed. Removing an unknown id is not an error.
    async fn remove_from_database(id: Self::Id, conn: &mut SqliteConnection) -> RecordsResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(result.rows_affected() > 0)
    }
}
