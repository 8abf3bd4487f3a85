use astorya::prelude::*;

#[cfg(not(feature = "cli"))]
fn main() -> AstoryaResult<()> {
    Err(AstoryaError::from("built without the cli feature"))
}

#[cfg(feature = "cli")]
mod cli {
    use clap::{Parser, Subcommand};

    use astorya::membership::ResourceRef;

    #[derive(Parser)]
    #[command(name = "astorya")]
    #[command(version, about = "Inspect who can see and edit Astorya stars, albums and documents")]
    pub struct Cli {
        #[command(subcommand)]
        pub command: Command,

        /// Base URL of the Astorya API
        #[arg(long, env = "ASTORYA_API_URL")]
        pub api_url: String,

        /// Session token sent as a bearer token
        #[arg(long, env = "ASTORYA_API_TOKEN", hide_env_values = true)]
        pub token: Option<String>,

        /// Per request timeout in seconds
        #[arg(long, env = "ASTORYA_API_TIMEOUT_SECS", default_value_t = 10)]
        pub timeout_secs: u64,
    }

    #[derive(Subcommand)]
    pub enum Command {
        /// List the members of a resource, e.g. `star:<id>` or `document:<star>/<id>`
        Members { resource: ResourceRef },

        /// List which of the given resources both users can access
        Common {
            user_a: String,
            user_b: String,

            #[arg(required = true)]
            resources: Vec<ResourceRef>,
        },
    }
}

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> AstoryaResult<()> {
    use std::time::Duration;

    use clap::Parser;
    use futures::future::join_all;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, Layer};

    use cli::{Cli, Command};

    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::DEBUG.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
    tracing::debug!("running {}", full_version());

    let args = Cli::parse();

    let mut config =
        ApiConfig::new(args.api_url).with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(token) = args.token {
        config = config.with_token(token);
    }

    let client = ApiClient::from_config(&config)?;
    let source = ApiResourceSource::new(client.clone());

    match args.command {
        Command::Members { resource } => {
            let resolver = MemberResolver::new(ApiUsernameLookup::new(client));
            let members = resolver.resolve_from_source(&source, &resource).await?;

            if members.is_empty() {
                println!("{resource} has no members besides its owner");
            }

            for member in members {
                println!(
                    "{}\t{}\t{}",
                    member.username, member.user_id, member.access_level
                );
            }
        }
        Command::Common {
            user_a,
            user_b,
            resources,
        } => {
            let fetched = join_all(resources.iter().map(|r| source.fetch_resource(r))).await;

            let mut loaded = Vec::with_capacity(fetched.len());
            for (reference, result) in resources.iter().zip(fetched) {
                match result {
                    Ok(resource) => loaded.push(resource),
                    Err(err) => tracing::warn!(%reference, "skipping resource: {err}"),
                }
            }

            let (user_a, user_b) = (UserId::from(user_a), UserId::from(user_b));
            for resource in common_resources(&loaded, &user_a, &user_b) {
                println!("{}\t{}", resource.kind(), resource.id());
            }
        }
    }

    Ok(())
}
