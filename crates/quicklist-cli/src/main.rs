mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use quicklist_core::AppConfig;
use quicklist_persistence::{FileStore, ListStore};
use quicklist_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("QUICKLIST_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load();

    match cli.command {
        None => {
            let data_dir = config.effective_data_dir(cli.data_dir.as_deref());
            let export_dir = config.effective_export_dir(None);
            let store = ListStore::load(FileStore::new(&data_dir)).await?;
            let mut app = App::new(store, export_dir);
            app.run().await?;
        }
        Some(cmd) => {
            let mut ctx = CliContext::load(config, cli.data_dir.as_deref()).await?;

            match cmd {
                Commands::Add { text } => handlers::item::handle_add(&mut ctx, &text).await?,
                Commands::List => handlers::list::handle_list(&ctx)?,
                Commands::Get { id } => handlers::item::handle_get(&ctx, id)?,
                Commands::Update(args) => handlers::item::handle_update(&mut ctx, args).await?,
                Commands::Edit { id, text } => {
                    handlers::item::handle_edit(&mut ctx, id, &text).await?
                }
                Commands::Toggle { id } => handlers::item::handle_toggle(&mut ctx, id).await?,
                Commands::Delete { id } => handlers::item::handle_delete(&mut ctx, id).await?,
                Commands::Title { title } => handlers::list::handle_title(&mut ctx, &title).await?,
                Commands::Clear => handlers::list::handle_clear(&mut ctx).await?,
                Commands::Export(args) => handlers::export::handle_export(&ctx, args).await?,
                Commands::Share(args) => handlers::share::handle_share(&ctx, args)?,
                Commands::Completions { shell } => {
                    clap_complete::generate(
                        shell,
                        &mut Cli::command(),
                        "quicklist",
                        &mut std::io::stdout(),
                    );
                }
            }
        }
    }

    Ok(())
}
