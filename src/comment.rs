use super::*;

/// Reply chains deeper than this are truncated rather than recursed into,
/// which also bounds a malformed, cyclic parent chain.
pub const MAX_REPLY_DEPTH: usize = 32;

/// A status together with its nested replies. `replies` is `None` for a
/// leaf, so the serialized form carries no `replies` key at all and the
/// presentation layer can tell "no replies" from "replies present".
#[derive(Clone, Debug, Serialize)]
pub struct Comment {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub replies: Option<Vec<Comment>>,
  #[serde(flatten)]
  pub status: Status,
}

/// Threads a flat list of statuses into the reply tree rooted at
/// `parent_id`: a stable partition on `in_reply_to_id`, recursing on each
/// match's own id. The input is never mutated and sibling order is
/// preserved.
pub fn build_comment_tree(
  statuses: &[Status],
  parent_id: &str,
) -> Vec<Comment> {
  build_subtree(statuses, parent_id, 0)
}

fn build_subtree(
  statuses: &[Status],
  parent_id: &str,
  depth: usize,
) -> Vec<Comment> {
  if depth >= MAX_REPLY_DEPTH {
    warn!(parent_id, "reply chain exceeds maximum depth, truncating");
    return Vec::new();
  }

  statuses
    .iter()
    .filter(|status| status.in_reply_to_id.as_deref() == Some(parent_id))
    .map(|status| {
      let replies = build_subtree(statuses, &status.id, depth + 1);

      Comment {
        replies: (!replies.is_empty()).then_some(replies),
        status: status.clone(),
      }
    })
    .collect()
}
