use crate::context::CliContext;
use crate::output::{self, ListResponse};

pub fn handle_list(ctx: &CliContext) -> anyhow::Result<()> {
    let list = ctx.store.list();
    output::output_success(ListResponse {
        title: list.title.clone(),
        items: list.items.clone(),
        count: list.len(),
        completed: list.completed_count(),
    });
    Ok(())
}

pub async fn handle_title(ctx: &mut CliContext, title: &str) -> anyhow::Result<()> {
    ctx.store.set_title(title).await?;
    output::output_success(serde_json::json!({ "title": ctx.store.title() }));
    Ok(())
}

pub async fn handle_clear(ctx: &mut CliContext) -> anyhow::Result<()> {
    ctx.store.clear().await?;
    output::output_success(serde_json::json!({ "cleared": true }));
    Ok(())
}
