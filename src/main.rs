use {
  anyhow::{Context, bail},
  retypeset::{Client, build_comment_tree},
  std::{backtrace::BacktraceStatus, env, io, process},
  tracing_subscriber::EnvFilter,
};

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let mut args = env::args().skip(1);

  let (Some(status_id), Some(instance_url)) = (args.next(), args.next())
  else {
    bail!("usage: retypeset <status-id> <instance-url>");
  };

  let client = Client::default();

  let descendants = client.fetch_descendants(&status_id, &instance_url).await;

  let tree = build_comment_tree(&descendants, &status_id);

  let json = serde_json::to_string_pretty(&tree)
    .context("failed to serialize comment tree")?;

  println!("{json}");

  Ok(())
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
