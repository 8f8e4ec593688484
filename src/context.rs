use super::*;

/// The `/api/v1/statuses/:id/context` response: the ancestor chain of a
/// status plus every descendant reply, both as flat lists.
#[derive(Debug, Deserialize)]
pub struct Context {
  pub ancestors: Vec<Status>,
  pub descendants: Vec<Status>,
}

impl Context {
  /// Direct replies to `status_id`, in the order the server returned them.
  /// Deeper descendants are dropped here and recovered by
  /// [`build_comment_tree`] when the full descendant list is threaded.
  pub fn direct_replies(self, status_id: &str) -> Vec<Status> {
    self
      .descendants
      .into_iter()
      .filter(|status| status.in_reply_to_id.as_deref() == Some(status_id))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const CONTEXT_JSON: &str = r#"{
    "ancestors": [],
    "descendants": [
      {
        "id": "101",
        "created_at": "2024-05-01T10:00:00.000Z",
        "account": {
          "id": "1",
          "username": "moth",
          "acct": "moth@example.social",
          "display_name": "Moth",
          "avatar": "https://example.social/avatars/moth.png",
          "url": "https://example.social/@moth"
        },
        "content": "<p>first</p>",
        "url": "https://example.social/@moth/101",
        "in_reply_to_id": "100",
        "replies_count": 1,
        "reblogs_count": 0,
        "favourites_count": 2
      },
      {
        "id": "102",
        "created_at": "2024-05-01T10:05:00.000Z",
        "account": {
          "id": "2",
          "username": "lamp",
          "acct": "lamp",
          "display_name": "Lamp",
          "avatar": "https://example.social/avatars/lamp.png",
          "url": "https://example.social/@lamp"
        },
        "content": "<p>nested</p>",
        "url": "https://example.social/@lamp/102",
        "in_reply_to_id": "101",
        "replies_count": 0,
        "reblogs_count": 0,
        "favourites_count": 0
      },
      {
        "id": "103",
        "created_at": "2024-05-01T10:10:00.000Z",
        "account": {
          "id": "1",
          "username": "moth",
          "acct": "moth@example.social",
          "display_name": "Moth",
          "avatar": "https://example.social/avatars/moth.png",
          "url": "https://example.social/@moth"
        },
        "content": "<p>second</p>",
        "url": "https://example.social/@moth/103",
        "in_reply_to_id": "100",
        "replies_count": 0,
        "reblogs_count": 1,
        "favourites_count": 0
      }
    ]
  }"#;

  #[test]
  fn parses_the_wire_format() {
    let context = serde_json::from_str::<Context>(CONTEXT_JSON).unwrap();

    assert!(context.ancestors.is_empty());
    assert_eq!(context.descendants.len(), 3);
    assert_eq!(context.descendants[0].account.username, "moth");
    assert_eq!(context.descendants[0].in_reply_to_id.as_deref(), Some("100"));
    assert_eq!(context.descendants[0].favourites_count, 2);
  }

  #[test]
  fn direct_replies_keeps_only_children_of_the_root_in_order() {
    let context = serde_json::from_str::<Context>(CONTEXT_JSON).unwrap();

    let replies = context.direct_replies("100");

    assert_eq!(
      replies
        .iter()
        .map(|status| status.id.as_str())
        .collect::<Vec<_>>(),
      ["101", "103"]
    );
  }

  #[test]
  fn direct_replies_of_an_unknown_root_are_empty() {
    let context = serde_json::from_str::<Context>(CONTEXT_JSON).unwrap();

    assert!(context.direct_replies("999").is_empty());
  }
}
