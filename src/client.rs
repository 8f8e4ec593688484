use {super::*, anyhow::Context as _};

#[derive(Clone)]
pub struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  async fn fetch_context(
    &self,
    status_id: &str,
    instance_url: &str,
  ) -> Result<Context> {
    let url = format!(
      "{}/api/v1/statuses/{status_id}/context",
      instance_url.trim_end_matches('/')
    );

    self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?
      .error_for_status()
      .context("instance rejected the context request")?
      .json::<Context>()
      .await
      .context("malformed context response")
  }

  /// Every descendant reply of `status_id`, still flat, suitable for
  /// threading with [`build_comment_tree`]. Fail-soft like
  /// [`Client::fetch_replies`].
  pub async fn fetch_descendants(
    &self,
    status_id: &str,
    instance_url: &str,
  ) -> Vec<Status> {
    if status_id.is_empty() || instance_url.is_empty() {
      return Vec::new();
    }

    match self.fetch_context(status_id, instance_url).await {
      Ok(context) => context.descendants,
      Err(error) => {
        warn!(status_id, instance_url, "failed to fetch context: {error:#}");
        Vec::new()
      }
    }
  }

  /// Direct replies to `status_id` on `instance_url`.
  ///
  /// Never fails: an empty identifier or instance URL short-circuits to an
  /// empty vec without touching the network, and any transport or decoding
  /// failure is logged and degrades to an empty vec. Comment loading must
  /// not break the surrounding page.
  pub async fn fetch_replies(
    &self,
    status_id: &str,
    instance_url: &str,
  ) -> Vec<Status> {
    if status_id.is_empty() || instance_url.is_empty() {
      return Vec::new();
    }

    match self.fetch_context(status_id, instance_url).await {
      Ok(context) => context.direct_replies(status_id),
      Err(error) => {
        warn!(status_id, instance_url, "failed to fetch replies: {error:#}");
        Vec::new()
      }
    }
  }
}
