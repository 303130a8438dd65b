pub mod handlers;
pub mod routes;
pub mod shared;
pub mod usecases;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{header, Method};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use shared::config::{self, Config};
use shared::mailer::{self, EmailJsClient};

/// Сервер сайта Yemen Gems и служебные команды
#[derive(Debug, Parser)]
#[command(name = "backend", version, about = "Yemen Gems site server")]
struct Cli {
    /// Path to config.toml (defaults to the one next to the executable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the site and the contact API (default)
    Serve,
    /// Convert PNG/JPEG images in a directory to WebP with ffmpeg
    OptimizeImages {
        /// Image directory (defaults to [images].dir)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// WebP quality 0-100 (defaults to [images].quality)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        quality: Option<u8>,
        /// Encoder executable
        #[arg(long, default_value = "ffmpeg")]
        encoder: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    shared::logging::initialize()?;

    let config = config::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::OptimizeImages {
            dir,
            quality,
            encoder,
        } => {
            let dir = dir.unwrap_or_else(|| config::resolve_path(&config.images.dir));
            let quality = quality.unwrap_or(config.images.quality);
            let summary = usecases::optimize_images::run(&dir, quality, &encoder).await?;
            if summary.failed > 0 {
                anyhow::bail!("{} image(s) failed to convert", summary.failed);
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    match EmailJsClient::new(config.mailer.clone()) {
        Ok(client) => mailer::initialize(client),
        Err(e) => tracing::warn!("Contact form relay disabled: {}", e),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Клиентский роутинг: неизвестные пути отдают index.html
    let static_dir = config::resolve_path(&config.server.static_dir);
    let spa = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));
    tracing::info!("Serving static files from {}", static_dir.display());

    let app = routes::configure_routes()
        .fallback_service(spa)
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_serve() {
        let cli = Cli::try_parse_from(["backend"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_optimize_images_args() {
        let cli = Cli::try_parse_from([
            "backend",
            "optimize-images",
            "--dir",
            "public/images",
            "--quality",
            "75",
            "--config",
            "site.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        match cli.command {
            Some(Command::OptimizeImages {
                dir,
                quality,
                encoder,
            }) => {
                assert_eq!(dir, Some(PathBuf::from("public/images")));
                assert_eq!(quality, Some(75));
                assert_eq!(encoder, "ffmpeg");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_quality_out_of_range() {
        assert!(Cli::try_parse_from(["backend", "optimize-images", "--quality", "101"]).is_err());
    }
}
