use crate::cli::UpdateArgs;
use crate::context::CliContext;
use crate::output;
use quicklist_domain::{ItemUpdate, TodoId};
use quicklist_persistence::EditOutcome;

fn not_found(id: TodoId) -> ! {
    output::output_error(&format!("Item not found: {}", id))
}

pub async fn handle_add(ctx: &mut CliContext, text: &str) -> anyhow::Result<()> {
    match ctx.store.add(text).await? {
        Some(item) => output::output_success(&item),
        None => output::output_error("Item text cannot be empty"),
    }
    Ok(())
}

pub fn handle_get(ctx: &CliContext, id: TodoId) -> anyhow::Result<()> {
    match ctx.store.get(id) {
        Some(item) => output::output_success(item),
        None => not_found(id),
    }
    Ok(())
}

pub async fn handle_update(ctx: &mut CliContext, args: UpdateArgs) -> anyhow::Result<()> {
    if args.text.as_deref().is_some_and(|text| text.trim().is_empty()) {
        output::output_error("Item text cannot be empty; use `edit` with empty text to remove an item");
    }
    let update = ItemUpdate {
        text: args.text.map(|text| text.trim().to_string()),
        completed: args.completed,
    };
    if update.is_empty() {
        output::output_error("Nothing to update: pass --text and/or --completed");
    }

    match ctx.store.update(args.id, update).await? {
        Some(item) => output::output_success(&item),
        None => not_found(args.id),
    }
    Ok(())
}

pub async fn handle_edit(ctx: &mut CliContext, id: TodoId, text: &str) -> anyhow::Result<()> {
    match ctx.store.commit_text(id, text).await? {
        EditOutcome::Updated(item) => output::output_success(&item),
        EditOutcome::Deleted(item) => {
            output::output_success(serde_json::json!({ "deleted": item.id }))
        }
        EditOutcome::NotFound => not_found(id),
    }
    Ok(())
}

pub async fn handle_toggle(ctx: &mut CliContext, id: TodoId) -> anyhow::Result<()> {
    match ctx.store.toggle(id).await? {
        Some(item) => output::output_success(&item),
        None => not_found(id),
    }
    Ok(())
}

pub async fn handle_delete(ctx: &mut CliContext, id: TodoId) -> anyhow::Result<()> {
    match ctx.store.delete(id).await? {
        Some(item) => output::output_success(serde_json::json!({ "deleted": item.id })),
        None => not_found(id),
    }
    Ok(())
}
