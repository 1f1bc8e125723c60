pub mod data_structures {
    use chrono::NaiveDateTime;
    use serde::{self, de::Error as _, Deserialize, Deserializer};
    #[cfg(feature = "backend")]
    use utoipa::{IntoParams, ToSchema};

    pub const DEFAULT_SKIP: u64 = 0;
    pub const DEFAULT_LIMIT: u64 = 100;
    pub const DEFAULT_USER_SEX: &str = "M";
    /// Largest `skip`/`limit` the store can bind as a signed 64-bit value.
    pub const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

    fn default_limit() -> u64 {
        DEFAULT_LIMIT
    }

    fn bounded_page_value<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let value = u64::deserialize(d)?;
        if value > MAX_PAGE_VALUE {
            return Err(D::Error::custom(format!(
                "{value} exceeds the maximum of {MAX_PAGE_VALUE}"
            )));
        }
        Ok(value)
    }

    fn default_user_sex() -> Option<String> {
        Some(DEFAULT_USER_SEX.to_owned())
    }

    /// Body of `POST /users/` and `PUT /users/{user_no}`.
    ///
    /// An update replaces every field, so an omitted `phone_number` clears the
    /// stored value and an omitted `user_sex` resets it to `"M"`.
    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(ToSchema))]
    pub struct UserCreate {
        pub id: String,
        pub email: String,
        #[serde(default)]
        pub phone_number: Option<String>,
        #[serde(default = "default_user_sex")]
        #[cfg_attr(feature = "backend", schema(default = "M"))]
        pub user_sex: Option<String>,
        pub user_name: String,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(ToSchema))]
    pub struct User {
        pub id: String,
        pub email: String,
        pub phone_number: Option<String>,
        pub user_sex: Option<String>,
        pub user_name: String,
        pub user_no: i32,
        pub reg_date: NaiveDateTime,
        #[serde(default)]
        pub posts: Vec<Post>,
    }

    /// Body of `PUT /posts/{post_no}`. The owner of a post cannot be changed.
    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(ToSchema))]
    pub struct PostUpdate {
        pub title: String,
        pub content: String,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(ToSchema))]
    pub struct PostCreate {
        pub title: String,
        pub content: String,
        pub user_no: i32,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(ToSchema))]
    pub struct Post {
        pub title: String,
        pub content: String,
        pub post_no: i32,
        pub reg_date: NaiveDateTime,
        pub user_no: i32,
    }

    /// `?skip=&limit=` of the list endpoints.
    #[derive(Clone, Copy, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(IntoParams))]
    #[cfg_attr(feature = "backend", into_params(parameter_in = Query))]
    pub struct ListQuery {
        #[serde(default, deserialize_with = "bounded_page_value")]
        pub skip: u64,
        #[serde(default = "default_limit", deserialize_with = "bounded_page_value")]
        pub limit: u64,
    }

    impl Default for ListQuery {
        fn default() -> Self {
            Self {
                skip: DEFAULT_SKIP,
                limit: DEFAULT_LIMIT,
            }
        }
    }

    /// Every error response carries exactly this shape.
    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(ToSchema))]
    pub struct ErrorDetail {
        pub detail: String,
    }

    impl ErrorDetail {
        pub fn new(detail: impl Into<String>) -> Self {
            Self {
                detail: detail.into(),
            }
        }
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "backend", derive(ToSchema))]
    pub struct Welcome {
        pub message: String,
    }
}

#[cfg(test)]
mod tests {
    use super::data_structures::*;
    use serde_json::json;

    #[test]
    fn user_create_fills_optional_fields() {
        let user: UserCreate = serde_json::from_value(json!({
            "id": "alice",
            "email": "alice@example.com",
            "user_name": "Alice"
        }))
        .unwrap();
        assert_eq!(user.phone_number, None);
        assert_eq!(user.user_sex.as_deref(), Some(DEFAULT_USER_SEX));
    }

    #[test]
    fn user_create_keeps_explicit_null_sex() {
        let user: UserCreate = serde_json::from_value(json!({
            "id": "alice",
            "email": "alice@example.com",
            "user_name": "Alice",
            "user_sex": null
        }))
        .unwrap();
        assert_eq!(user.user_sex, None);
    }

    #[test]
    fn user_create_requires_id() {
        let res = serde_json::from_value::<UserCreate>(json!({
            "email": "alice@example.com",
            "user_name": "Alice"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn list_query_defaults() {
        let q: ListQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(q, ListQuery::default());
        assert_eq!(q.limit, 100);
    }

    #[test]
    fn list_query_rejects_values_beyond_i64() {
        let q: ListQuery =
            serde_json::from_value(json!({ "skip": MAX_PAGE_VALUE, "limit": 0 })).unwrap();
        assert_eq!(q.skip, MAX_PAGE_VALUE);

        let res = serde_json::from_value::<ListQuery>(json!({ "skip": MAX_PAGE_VALUE + 1 }));
        assert!(res.is_err());
        let res = serde_json::from_value::<ListQuery>(json!({ "limit": u64::MAX }));
        assert!(res.is_err());
    }
}
