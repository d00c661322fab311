use crate::cli::ShareArgs;
use crate::context::CliContext;
use crate::output;
use quicklist_domain::{share_link, share_message};

pub fn handle_share(ctx: &CliContext, args: ShareArgs) -> anyhow::Result<()> {
    let list = ctx.store.list();
    let link = share_link(args.method, list);

    if args.open {
        if let Err(e) = webbrowser::open(&link) {
            output::output_error(&format!("Could not open {} link: {}", args.method, e));
        }
        tracing::info!("Opened {} share link", args.method);
    }

    output::output_success(serde_json::json!({
        "method": args.method,
        "link": link,
        "message": share_message(list),
        "opened": args.open,
    }));
    Ok(())
}
