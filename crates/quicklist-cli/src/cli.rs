use clap::{Args, Parser, Subcommand};
use quicklist_domain::{ShareMethod, TodoId};
use quicklist_export::ExportMode;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "quicklist")]
#[command(about = "A terminal to-do list with PDF export", long_about = None)]
#[command(version = VERSION, arg_required_else_help = false)]
pub struct Cli {
    /// Directory holding the persisted list (or set QUICKLIST_DATA_DIR)
    #[arg(long, value_name = "DIR", env = "QUICKLIST_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append an item
    Add {
        text: String,
    },
    /// Show the title and every item
    List,
    /// Show one item
    Get {
        #[arg(long)]
        id: TodoId,
    },
    /// Change fields of an item
    Update(UpdateArgs),
    /// Replace an item's text; empty text removes the item
    Edit {
        #[arg(long)]
        id: TodoId,
        text: String,
    },
    /// Flip an item between open and done
    Toggle {
        #[arg(long)]
        id: TodoId,
    },
    /// Remove an item
    Delete {
        #[arg(long)]
        id: TodoId,
    },
    /// Set the list title
    Title {
        title: String,
    },
    /// Remove the title, every item and the stored entry
    Clear,
    /// Write todo-list.pdf
    Export(ExportArgs),
    /// Build a share link for the list
    Share(ShareArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub id: TodoId,
    #[arg(long)]
    pub text: Option<String>,
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Directory to write into (defaults to the configured export dir)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,
    /// raster (snapshot of the list view) or text
    #[arg(long, default_value = "raster")]
    pub mode: ExportMode,
    /// Columns of the rendered list view
    #[arg(long)]
    pub width: Option<u16>,
}

#[derive(Args)]
pub struct ShareArgs {
    /// email, whatsapp, telegram or sms
    #[arg(long)]
    pub method: ShareMethod,
    /// Open the link with the system handler
    #[arg(long)]
    pub open: bool,
}
