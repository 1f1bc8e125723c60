use super::{posts, users, UniqueField};
use crate::test_support::{memory_db, post, user};
use postboard_commons::data_structures::{PostUpdate, UserCreate};

#[actix_web::test]
async fn insert_assigns_increasing_keys() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let a = users::insert(conn, user("a")).await.unwrap();
    let b = users::insert(conn, user("b")).await.unwrap();
    assert!(b.user.user_no > a.user.user_no);
    assert!(a.posts.is_empty());
}

#[actix_web::test]
async fn find_by_unique_field_matches_column() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let a = users::insert(conn, user("a")).await.unwrap();

    let by_id = users::find_by_unique_field(conn, UniqueField::Id, "a")
        .await
        .unwrap();
    assert_eq!(by_id.map(|u| u.user_no), Some(a.user.user_no));

    let by_email = users::find_by_unique_field(conn, UniqueField::Email, "a@example.com")
        .await
        .unwrap();
    assert_eq!(by_email.map(|u| u.user_no), Some(a.user.user_no));

    let missing = users::find_by_unique_field(conn, UniqueField::Email, "a")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[actix_web::test]
async fn list_groups_posts_by_owner() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let a = users::insert(conn, user("a")).await.unwrap().user;
    let b = users::insert(conn, user("b")).await.unwrap().user;
    posts::insert(conn, post("a1", a.user_no)).await.unwrap();
    posts::insert(conn, post("b1", b.user_no)).await.unwrap();
    posts::insert(conn, post("a2", a.user_no)).await.unwrap();

    let listed = users::list(conn, 0, 100).await.unwrap();
    assert_eq!(listed.len(), 2);
    let titles = listed[0]
        .posts
        .iter()
        .map(|p| p.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["a1", "a2"]);
    assert_eq!(listed[1].posts.len(), 1);
}

#[actix_web::test]
async fn list_applies_offset_and_limit() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    for id in ["a", "b", "c"] {
        users::insert(conn, user(id)).await.unwrap();
    }
    let page = users::list(conn, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].user.id, "b");

    assert!(users::list(conn, 0, 0).await.unwrap().is_empty());
    assert!(users::list(conn, 5, 10).await.unwrap().is_empty());
}

#[actix_web::test]
async fn update_replaces_all_fields() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let mut data = user("a");
    data.phone_number = Some("010-0000-0000".to_owned());
    let created = users::insert(conn, data).await.unwrap().user;

    let replacement = UserCreate {
        id: "a2".to_owned(),
        email: "a2@example.com".to_owned(),
        phone_number: None,
        user_sex: None,
        user_name: "Renamed".to_owned(),
    };
    let updated = users::update(conn, created.user_no, replacement)
        .await
        .unwrap()
        .unwrap()
        .user;
    assert_eq!(updated.id, "a2");
    assert_eq!(updated.phone_number, None);
    assert_eq!(updated.user_sex, None);
    assert_eq!(updated.reg_date, created.reg_date);

    assert!(users::update(conn, 999, user("x")).await.unwrap().is_none());
}

#[actix_web::test]
async fn update_model_reuses_loaded_row() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let created = users::insert(conn, user("owner")).await.unwrap().user;
    let first = posts::insert(conn, post("first", created.user_no)).await.unwrap();

    let row = users::find_row(conn, created.user_no).await.unwrap().unwrap();
    let record = users::update_model(conn, row, user("renamed")).await.unwrap();
    assert_eq!(record.user.user_no, created.user_no);
    assert_eq!(record.user.email, "renamed@example.com");
    assert_eq!(record.posts, vec![first]);

    assert!(users::find_row(conn, 999).await.unwrap().is_none());
}

#[actix_web::test]
async fn delete_user_removes_owned_posts() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let a = users::insert(conn, user("a")).await.unwrap().user;
    let keep = users::insert(conn, user("b")).await.unwrap().user;
    let owned = posts::insert(conn, post("a1", a.user_no)).await.unwrap();
    let other = posts::insert(conn, post("b1", keep.user_no)).await.unwrap();

    let removed = users::delete(conn, a.user_no).await.unwrap().unwrap();
    assert_eq!(removed.user, a);
    assert_eq!(removed.posts, vec![owned.clone()]);

    assert!(users::find_by_id(conn, a.user_no).await.unwrap().is_none());
    assert!(posts::find_by_id(conn, owned.post_no).await.unwrap().is_none());
    assert!(posts::find_by_id(conn, other.post_no).await.unwrap().is_some());
    assert!(users::delete(conn, a.user_no).await.unwrap().is_none());
}

#[actix_web::test]
async fn post_insert_rejects_unknown_owner() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let err = posts::insert(conn, post("orphan", 42)).await.unwrap_err();
    assert!(err.sql_err().is_some());
    assert!(posts::list(conn, 0, 100).await.unwrap().is_empty());
}

#[actix_web::test]
async fn post_update_keeps_owner_and_date() {
    let db = memory_db().await;
    let conn = &db.db_connection;
    let a = users::insert(conn, user("a")).await.unwrap().user;
    let created = posts::insert(conn, post("first", a.user_no)).await.unwrap();

    let updated = posts::update(
        conn,
        created.post_no,
        PostUpdate {
            title: "second".to_owned(),
            content: "rewritten".to_owned(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "second");
    assert_eq!(updated.content, "rewritten");
    assert_eq!(updated.user_no, a.user_no);
    assert_eq!(updated.reg_date, created.reg_date);
}
