use super::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Account {
  pub acct: String,
  pub avatar: String,
  pub display_name: String,
  pub id: String,
  pub url: String,
  pub username: String,
}
