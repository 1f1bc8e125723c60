use crate::entity::posts;
use chrono::Utc;
use postboard_commons::data_structures::{PostCreate, PostUpdate};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub async fn insert<C: ConnectionTrait>(conn: &C, data: PostCreate) -> Result<posts::Model, DbErr> {
    let model = posts::ActiveModel {
        post_no: ActiveValue::NotSet,
        title: ActiveValue::Set(data.title),
        content: ActiveValue::Set(data.content),
        reg_date: ActiveValue::Set(Utc::now().naive_utc()),
        user_no: ActiveValue::Set(data.user_no),
    };
    model.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    post_no: i32,
) -> Result<Option<posts::Model>, DbErr> {
    posts::Entity::find_by_id(post_no).one(conn).await
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<posts::Model>, DbErr> {
    posts::Entity::find()
        .order_by_asc(posts::Column::PostNo)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    post_no: i32,
    data: PostUpdate,
) -> Result<Option<posts::Model>, DbErr> {
    let Some(post) = find_by_id(conn, post_no).await? else {
        return Ok(None);
    };
    let mut model: posts::ActiveModel = post.into();
    model.title = ActiveValue::Set(data.title);
    model.content = ActiveValue::Set(data.content);
    Ok(Some(model.update(conn).await?))
}

pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    post_no: i32,
) -> Result<Option<posts::Model>, DbErr> {
    let Some(post) = find_by_id(conn, post_no).await? else {
        return Ok(None);
    };
    posts::Entity::delete_by_id(post_no).exec(conn).await?;
    Ok(Some(post))
}
