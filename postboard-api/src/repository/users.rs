use crate::entity::{posts, users};
use chrono::Utc;
use postboard_commons::data_structures::UserCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;

/// A user row together with the posts it owns, in `post_no` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub user: users::Model,
    pub posts: Vec<posts::Model>,
}

/// Columns carrying a uniqueness constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniqueField {
    Id,
    Email,
}

impl UniqueField {
    fn column(self) -> users::Column {
        match self {
            UniqueField::Id => users::Column::Id,
            UniqueField::Email => users::Column::Email,
        }
    }
}

fn apply(model: &mut users::ActiveModel, data: UserCreate) {
    model.id = ActiveValue::Set(data.id);
    model.email = ActiveValue::Set(data.email);
    model.phone_number = ActiveValue::Set(data.phone_number);
    model.user_sex = ActiveValue::Set(data.user_sex);
    model.user_name = ActiveValue::Set(data.user_name);
}

pub async fn insert<C: ConnectionTrait>(conn: &C, data: UserCreate) -> Result<UserRecord, DbErr> {
    let mut model = users::ActiveModel {
        user_no: ActiveValue::NotSet,
        reg_date: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };
    apply(&mut model, data);
    let user = model.insert(conn).await?;
    Ok(UserRecord {
        user,
        posts: Vec::new(),
    })
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    user_no: i32,
) -> Result<Option<UserRecord>, DbErr> {
    let Some(user) = users::Entity::find_by_id(user_no).one(conn).await? else {
        return Ok(None);
    };
    let posts = posts_of(conn, user.user_no).await?;
    Ok(Some(UserRecord { user, posts }))
}

pub async fn exists<C: ConnectionTrait>(conn: &C, user_no: i32) -> Result<bool, DbErr> {
    Ok(find_row(conn, user_no).await?.is_some())
}

pub async fn find_by_unique_field<C: ConnectionTrait>(
    conn: &C,
    field: UniqueField,
    value: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(field.column().eq(value))
        .one(conn)
        .await
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<UserRecord>, DbErr> {
    let users = users::Entity::find()
        .order_by_asc(users::Column::UserNo)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await?;
    let owners = users.iter().map(|u| u.user_no).collect::<Vec<_>>();
    let mut posts = posts_by_owner(conn, &owners).await?;
    Ok(users
        .into_iter()
        .map(|user| UserRecord {
            posts: posts.remove(&user.user_no).unwrap_or_default(),
            user,
        })
        .collect())
}

pub async fn find_row<C: ConnectionTrait>(
    conn: &C,
    user_no: i32,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(user_no).one(conn).await
}

/// Replaces every editable field. `reg_date` and `user_no` are left alone.
pub async fn update<C: ConnectionTrait>(
    conn: &C,
    user_no: i32,
    data: UserCreate,
) -> Result<Option<UserRecord>, DbErr> {
    let Some(user) = find_row(conn, user_no).await? else {
        return Ok(None);
    };
    Ok(Some(update_model(conn, user, data).await?))
}

/// Same as [`update`] for a row the caller already loaded.
pub async fn update_model<C: ConnectionTrait>(
    conn: &C,
    user: users::Model,
    data: UserCreate,
) -> Result<UserRecord, DbErr> {
    let mut model: users::ActiveModel = user.into();
    apply(&mut model, data);
    let user = model.update(conn).await?;
    let posts = posts_of(conn, user.user_no).await?;
    Ok(UserRecord { user, posts })
}

/// Removes the user and every post it owns. The returned record is the state
/// right before removal.
pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    user_no: i32,
) -> Result<Option<UserRecord>, DbErr> {
    let Some(record) = find_by_id(conn, user_no).await? else {
        return Ok(None);
    };
    // the foreign key cascades too, but not every backend enforces it
    posts::Entity::delete_many()
        .filter(posts::Column::UserNo.eq(user_no))
        .exec(conn)
        .await?;
    users::Entity::delete_by_id(user_no).exec(conn).await?;
    Ok(Some(record))
}

pub async fn posts_of<C: ConnectionTrait>(
    conn: &C,
    user_no: i32,
) -> Result<Vec<posts::Model>, DbErr> {
    posts::Entity::find()
        .filter(posts::Column::UserNo.eq(user_no))
        .order_by_asc(posts::Column::PostNo)
        .all(conn)
        .await
}

/// Loads the posts of several users with a single query, grouped by owner.
pub async fn posts_by_owner<C: ConnectionTrait>(
    conn: &C,
    user_nos: &[i32],
) -> Result<HashMap<i32, Vec<posts::Model>>, DbErr> {
    let mut grouped: HashMap<i32, Vec<posts::Model>> = HashMap::new();
    if user_nos.is_empty() {
        return Ok(grouped);
    }
    let posts = posts::Entity::find()
        .filter(posts::Column::UserNo.is_in(user_nos.iter().copied()))
        .order_by_asc(posts::Column::PostNo)
        .all(conn)
        .await?;
    for post in posts {
        grouped.entry(post.user_no).or_default().push(post);
    }
    Ok(grouped)
}
