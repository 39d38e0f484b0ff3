//! Inbox commands

use deskmate_core::{Applied, EmailsPage};
use deskmate_domain::{EmailAction, EmailConfig, Result};

use crate::cli::MailConfigArgs;
use crate::context::AppContext;
use crate::render::render_emails;
use crate::utils::command_helpers::execute_with_logging;

pub async fn fetch(ctx: &AppContext) -> Result<String> {
    let page = EmailsPage::new(ctx.page_context());
    execute_with_logging("mail::fetch", async {
        page.fetch_new_mail().await?;
        Ok(render_emails(&page, ctx.i18n.translator()))
    })
    .await
}

/// Reply to `id`, sending `text` or else the backend's draft.
pub async fn reply(ctx: &AppContext, id: &str, text: Option<String>) -> Result<String> {
    let page = EmailsPage::new(ctx.page_context());
    execute_with_logging("mail::reply", async {
        if let Applied::Failed(err) = page.load_emails().await {
            ctx.page_context().notify_failure(&err, "Failed to load emails");
            return Err(err);
        }
        if !page.open_reply(id) {
            return Err(ctx.page_context().reject("Email not found"));
        }
        if let Some(text) = text {
            page.edit_reply(text);
        }
        page.send_reply().await?;
        Ok(render_emails(&page, ctx.i18n.translator()))
    })
    .await
}

pub async fn action(ctx: &AppContext, id: &str, action: EmailAction) -> Result<String> {
    let page = EmailsPage::new(ctx.page_context());
    execute_with_logging("mail::action", async {
        page.apply_action(id, action).await?;
        Ok(render_emails(&page, ctx.i18n.translator()))
    })
    .await
}

/// Save account settings, starting from the stored record.
pub async fn configure(ctx: &AppContext, args: MailConfigArgs) -> Result<String> {
    let page = EmailsPage::new(ctx.page_context());
    execute_with_logging("mail::config", async {
        // Never save over a record that could not be read.
        if let Applied::Failed(err) = page.load_config().await {
            ctx.page_context().notify_failure(&err, "Failed to load email configuration");
            return Err(err);
        }
        page.open_config();
        page.edit_config(|config| apply_config_args(config, args));
        page.save_config().await?;

        let saved = page.config().unwrap_or_default();
        Ok(format!("{} <{}:{}>", saved.email, saved.imap_server, saved.imap_port))
    })
    .await
}

fn apply_config_args(config: &mut EmailConfig, args: MailConfigArgs) {
    if let Some(server) = args.imap_server {
        config.imap_server = server;
    }
    if let Some(port) = args.imap_port {
        config.imap_port = port;
    }
    if let Some(server) = args.smtp_server {
        config.smtp_server = server;
    }
    if let Some(port) = args.smtp_port {
        config.smtp_port = port;
    }
    if let Some(email) = args.email {
        config.email = email;
    }
    if let Some(password) = args.password {
        config.password = password;
    }
}
