use super::*;

/// A status as returned by the Mastodon API. Everything except `id` and
/// `in_reply_to_id` is passed through untouched for the presentation layer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Status {
  pub account: Account,
  pub content: String,
  pub created_at: String,
  pub favourites_count: u64,
  pub id: String,
  pub in_reply_to_id: Option<String>,
  pub reblogs_count: u64,
  pub replies_count: u64,
  pub url: String,
}
