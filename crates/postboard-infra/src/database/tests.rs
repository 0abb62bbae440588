use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

use postboard_core::domain::{NewPost, NewUser, Post, User};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository, UserRepository};

use crate::database::entity::{post, user};
use crate::database::mysql_base::map_db_err;
use crate::database::mysql_repo::{MySqlPostRepository, MySqlUserRepository};

fn ana(id: i32) -> user::Model {
    user::Model {
        id,
        first_name: "Ana".to_owned(),
        last_name: "Silva".to_owned(),
        email: "ana@x.com".to_owned(),
    }
}

fn hello_post(id: i32, user_id: i32) -> post::Model {
    post::Model {
        id,
        title: "Hi".to_owned(),
        description: "World".to_owned(),
        user_id,
    }
}

fn inserted(last_insert_id: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id,
        rows_affected: 1,
    }
}

#[tokio::test]
async fn test_create_user_returns_generated_id() {
    // MySQL has no RETURNING: the insert is followed by a lookup of the new row
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results(vec![inserted(1)])
        .append_query_results(vec![vec![ana(1)]])
        .into_connection();

    let repo = MySqlUserRepository::new(db);

    let user = repo
        .create(NewUser {
            first_name: "Ana".to_owned(),
            last_name: "Silva".to_owned(),
            email: "ana@x.com".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.first_name, "Ana");
    assert_eq!(user.email, "ana@x.com");
}

#[tokio::test]
async fn test_find_user_by_id() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results(vec![vec![ana(4)]])
        .into_connection();

    let repo = MySqlUserRepository::new(db);

    let result: Option<User> = repo.find_by_id(4).await.unwrap();

    let user = result.unwrap();
    assert_eq!(user.id, 4);
    assert_eq!(user.last_name, "Silva");
}

#[tokio::test]
async fn test_find_missing_user() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = MySqlUserRepository::new(db);

    let result: Option<User> = repo.find_by_id(99999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_save_user_updates_row() {
    let mut updated = ana(2);
    updated.email = "ana@y.com".to_owned();

    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results(vec![vec![updated.clone()]])
        .into_connection();

    let repo = MySqlUserRepository::new(db);

    let saved: User = repo.save(User::from(updated)).await.unwrap();
    assert_eq!(saved.email, "ana@y.com");
}

#[tokio::test]
async fn test_create_post_keeps_user_id() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results(vec![inserted(10)])
        .append_query_results(vec![vec![hello_post(10, 1)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db);

    let post = repo
        .create(NewPost {
            title: "Hi".to_owned(),
            description: "World".to_owned(),
            user_id: 1,
        })
        .await
        .unwrap();

    assert_eq!(post.id, 10);
    assert_eq!(post.user_id, 1);
    assert_eq!(post.description, "World");
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results(vec![vec![hello_post(3, 1)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(3).await.unwrap();
    assert_eq!(result.map(|p| p.title), Some("Hi".to_owned()));
}

#[test]
fn test_map_db_err() {
    assert!(matches!(
        map_db_err(DbErr::Conn(RuntimeErr::Internal("refused".to_owned()))),
        RepoError::Connection(_)
    ));
    assert!(matches!(
        map_db_err(DbErr::RecordNotUpdated),
        RepoError::NotFound
    ));
    assert!(matches!(
        map_db_err(DbErr::Custom("boom".to_owned())),
        RepoError::Query(_)
    ));
}
