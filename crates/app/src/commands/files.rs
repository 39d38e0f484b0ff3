//! Spreadsheet commands

use std::path::PathBuf;
use std::sync::Arc;

use deskmate_core::{FileSink, FilesPage};
use deskmate_domain::Result;
use deskmate_infra::DiskFileSink;

use crate::context::AppContext;
use crate::render::render_files;
use crate::utils::command_helpers::execute_with_logging;

pub async fn create(
    ctx: &AppContext,
    request: &str,
    data: Option<String>,
    sample: bool,
) -> Result<String> {
    let page = FilesPage::new(ctx.page_context(), Arc::clone(&ctx.downloads));
    execute_with_logging("file::create", async {
        page.open_create();
        page.edit_draft(|draft| {
            draft.request_text = request.to_string();
            draft.data = data.unwrap_or_default();
        });
        if sample {
            page.fill_sample_data();
        }
        page.submit_create().await?;
        Ok(render_files(&page, ctx.i18n.translator()))
    })
    .await
}

/// Save `file_{id}.xlsx`, into `dir` when given.
pub async fn download(ctx: &AppContext, id: &str, dir: Option<PathBuf>) -> Result<String> {
    let sink: Arc<dyn FileSink> = match dir {
        Some(dir) => Arc::new(DiskFileSink::new(dir)),
        None => Arc::clone(&ctx.downloads),
    };
    let page = FilesPage::new(ctx.page_context(), sink);

    execute_with_logging("file::download", async {
        let path = page.download(id).await?;
        Ok(path.display().to_string())
    })
    .await
}
