use crate::{
    data::{
        DataType, IdPath,
        student::{AddStudent, Student},
    },
    error::RecordsResult,
    maud_conveniences::{
        choice_group, escape, form_submit_button, render_table, simple_form_element, title,
    },
    state::{DbConnection, RecordsState},
};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use maud::{Markup, html};

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
pub const COURSES: [&str; 6] = [
    "Math",
    "Science",
    "English",
    "History",
    "Art",
    "Computer Science",
];

pub async fn get_index(
    State(state): State<RecordsState>,
    mut conn: DbConnection,
) -> RecordsResult<Markup> {
    let students = Student::get_all(&mut conn).await?;

    Ok(state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-5xl w-full flex flex-col space-y-8" {
            (add_student_form())
            (students_table(students))
        }
    }))
}

fn add_student_form() -> Markup {
    html! {
        div {
            (title("Add Student"))
            form method="post" action="/submit" class="p-4" {
                (simple_form_element("first_name", "First Name", true))
                (simple_form_element("last_name", "Last Name", true))
                (simple_form_element("id_number", "ID Number", true))
                (choice_group("gender", "Gender", "radio", &GENDERS))
                (choice_group("courses", "Courses", "checkbox", &COURSES))
                (form_submit_button(Some("Add Student")))
            }
        }
    }
}

fn students_table(students: Vec<Student>) -> Markup {
    render_table(
        "Students",
        ["ID", "First Name", "Last Name", "ID Number", "Gender", "Courses", ""],
        students
            .into_iter()
            .map(|student| {
                [
                    escape(student.id.to_string()),
                    escape(student.first_name),
                    escape(student.last_name),
                    escape(student.id_number),
                    escape(student.gender),
                    escape(student.courses),
                    html! {
                        form method="post" action={"/delete/" (student.id)} {
                            button type="submit" class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" {"Delete"}
                        }
                    },
                ]
            })
            .collect(),
    )
}

pub async fn post_submit(
    mut conn: DbConnection,
    Form(pairs): Form<Vec<(String, String)>>,
) -> RecordsResult<Redirect> {
    let to_be_added = AddStudent::try_from(pairs)?;
    let id = Student::insert_into_database(to_be_added, &mut conn).await?;
    info!(id, "Added student");

    Ok(Redirect::to("/"))
}

pub async fn post_delete(
    mut conn: DbConnection,
    Path(IdPath { id }): Path<IdPath>,
) -> RecordsResult<Redirect> {
    let existing = Student::get_from_db_by_id(id, &mut conn).await?;
    let removed = Student::remove_from_database(id, &mut conn).await?;
    match existing {
        Some(student) if removed => info!(id, id_number = %student.id_number, "Removed student"),
        _ => debug!(id, "No student to remove"),
    }

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use crate::{
        config::RuntimeConfiguration,
        data::{DataType, student::Student},
        routes::router,
        state::RecordsState,
    };
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let config = RuntimeConfiguration::with_db_path(dir.path().join("students.db"));
        let state = RecordsState::new(&config).await.unwrap();
        (dir, router(state))
    }

    async fn stored_students(dir: &TempDir) -> Vec<Student> {
        let config = RuntimeConfiguration::with_db_path(dir.path().join("students.db"));
        let state = RecordsState::new(&config).await.unwrap();
        let mut conn = state.get_connection().await.unwrap();
        Student::get_all(&mut conn).await.unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn submit(body: &'static str) -> Request<Body> {
        Request::post("/submit")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn delete(id: &str) -> Request<Body> {
        Request::post(format!("/delete/{id}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn index_body(app: &Router) -> String {
        let response = send(app, Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_redirects_home(response: &Response) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    fn row_count(body: &str) -> usize {
        body.matches("action=\"/delete/").count()
    }

    #[tokio::test]
    async fn empty_listing_renders_form() {
        let (_dir, app) = app().await;
        let body = index_body(&app).await;

        assert!(body.contains("action=\"/submit\""));
        assert!(body.contains("name=\"courses\""));
        assert_eq!(row_count(&body), 0);
    }

    #[tokio::test]
    async fn create_list_then_delete() {
        let (_dir, app) = app().await;

        let response = send(
            &app,
            submit("first_name=Ann&last_name=Lee&id_number=X1&gender=F&courses=Math&courses=Art"),
        )
        .await;
        assert_redirects_home(&response);

        let body = index_body(&app).await;
        assert_eq!(row_count(&body), 1);
        for value in ["Ann", "Lee", "X1", "Math, Art"] {
            assert!(body.contains(&format!(">{value}</td>")), "missing {value}");
        }
        assert!(body.contains("action=\"/delete/1\""));

        assert_redirects_home(&send(&app, delete("1")).await);

        let body = index_body(&app).await;
        assert_eq!(row_count(&body), 0);
        assert!(!body.contains("Math, Art"));
    }

    #[tokio::test]
    async fn no_courses_is_stored_as_empty() {
        let (dir, app) = app().await;

        assert_redirects_home(
            &send(&app, submit("first_name=Bo&last_name=Ng&id_number=Y2&gender=M")).await,
        );

        let body = index_body(&app).await;
        assert_eq!(row_count(&body), 1);
        assert!(body.contains("<td class=\"py-2 px-4 border-b border-gray-600 text-gray-200\"></td>"));

        let students = stored_students(&dir).await;
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].first_name, "Bo");
        assert_eq!(students[0].gender, "M");
        assert_eq!(students[0].courses, "");
    }

    #[tokio::test]
    async fn courses_are_stored_in_submission_order() {
        let (dir, app) = app().await;

        send(
            &app,
            submit("first_name=Ann&last_name=Lee&id_number=X1&gender=F&courses=Art&courses=Math"),
        )
        .await;

        assert!(index_body(&app).await.contains(">Art, Math</td>"));
        assert_eq!(stored_students(&dir).await[0].courses, "Art, Math");
    }

    #[tokio::test]
    async fn delete_keeps_other_rows() {
        let (_dir, app) = app().await;

        send(&app, submit("first_name=Ann&last_name=Lee&id_number=X1&gender=F")).await;
        send(&app, submit("first_name=Bo&last_name=Ng&id_number=Y2&gender=M")).await;

        assert_redirects_home(&send(&app, delete("1")).await);

        let body = index_body(&app).await;
        assert_eq!(row_count(&body), 1);
        assert!(!body.contains(">Ann</td>"));
        assert!(body.contains(">Bo</td>"));
    }

    #[tokio::test]
    async fn deleting_unknown_id_redirects_and_changes_nothing() {
        let (_dir, app) = app().await;

        send(&app, submit("first_name=Ann&last_name=Lee&id_number=X1&gender=F")).await;
        let before = index_body(&app).await;

        assert_redirects_home(&send(&app, delete("42")).await);
        assert_eq!(index_body(&app).await, before);
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_insert() {
        let (_dir, app) = app().await;

        let response = send(&app, submit("first_name=Ann&last_name=Lee&gender=F")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(row_count(&index_body(&app).await), 0);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let (_dir, app) = app().await;

        let response = send(&app, delete("abc")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn values_are_escaped() {
        let (_dir, app) = app().await;

        send(
            &app,
            submit("first_name=%3Cb%3EAnn&last_name=Lee&id_number=X1&gender=F"),
        )
        .await;

        let body = index_body(&app).await;
        assert!(body.contains("&lt;b&gt;Ann"));
        assert!(!body.contains("<b>Ann"));
    }
}
