use crate::schema::content;

use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = content)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContentRow {
  pub key: String,
  pub value: String,
  pub updated_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = content)]
pub struct NewContentRow<'a> {
  pub key: &'a str,
  pub value: &'a str,
}
