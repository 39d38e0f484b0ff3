//! Email inbox
//!
//! Shows the analysed inbox, lets the user trigger ingestion, edit the mail
//! account settings and send (possibly edited) draft replies.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use deskmate_domain::{
    Email, EmailAction, EmailActionRequest, EmailConfig, Result, SendReply,
};
use parking_lot::Mutex;
use tracing::{debug, instrument};

use super::{is_blank, Page, PageContext};
use crate::forms::FormState;
use crate::navigation::Route;
use crate::view_state::{Applied, LoadPhase, Resource};

/// Reply being edited for one email
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyDraft {
    pub email_id: String,
    pub text: String,
}

pub struct EmailsPage {
    ctx: PageContext,
    emails: Resource<Vec<Email>>,
    config: Resource<Option<EmailConfig>>,
    config_form: Mutex<FormState<EmailConfig>>,
    reply: Mutex<FormState<ReplyDraft>>,
    fetching: AtomicBool,
}

impl EmailsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            emails: Resource::new("emails"),
            config: Resource::new("email-config"),
            config_form: Mutex::new(FormState::new()),
            reply: Mutex::new(FormState::new()),
            fetching: AtomicBool::new(false),
        }
    }

    pub async fn load_emails(&self) -> Applied {
        self.emails.load(self.ctx.api.list_emails()).await
    }

    pub async fn load_config(&self) -> Applied {
        self.config.load(self.ctx.api.get_email_config()).await
    }

    pub fn emails(&self) -> Vec<Email> {
        self.emails.get()
    }

    pub fn phase(&self) -> LoadPhase {
        self.emails.phase()
    }

    pub fn resource(&self) -> &Resource<Vec<Email>> {
        &self.emails
    }

    /// Stored account settings; `None` until one is saved.
    pub fn config(&self) -> Option<EmailConfig> {
        self.config.get()
    }

    pub fn unread_count(&self) -> usize {
        self.emails.with(|emails| emails.iter().filter(|email| email.is_unread()).count())
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    /// Ask the backend to pull and analyse new mail, then re-read the inbox.
    ///
    /// A second call while one is in flight is ignored.
    #[instrument(skip(self))]
    pub async fn fetch_new_mail(&self) -> Result<()> {
        if self.fetching.swap(true, Ordering::AcqRel) {
            debug!("mail fetch already running");
            return Ok(());
        }

        let outcome = async {
            self.ctx.api.fetch_emails().await?;
            self.load_emails().await;
            Ok(())
        };
        let result = self
            .ctx
            .write("fetch_emails", outcome, "Emails fetched and analyzed", "Failed to fetch emails")
            .await;

        self.fetching.store(false, Ordering::Release);
        result
    }

    /// Open the settings dialog pre-filled with the stored config, or the
    /// default ports when none exists.
    pub fn open_config(&self) {
        let current = self.config().unwrap_or_default();
        self.config_form.lock().open_with(current);
    }

    pub fn close_config(&self) {
        self.config_form.lock().close();
    }

    pub fn is_config_open(&self) -> bool {
        self.config_form.lock().is_open()
    }

    pub fn edit_config(&self, edit: impl FnOnce(&mut EmailConfig)) {
        edit(self.config_form.lock().draft_mut());
    }

    pub fn config_draft(&self) -> EmailConfig {
        self.config_form.lock().draft().clone()
    }

    /// `POST /email-config`, then re-read the stored config.
    #[instrument(skip(self))]
    pub async fn save_config(&self) -> Result<()> {
        let draft = self.config_draft();
        self.ctx
            .write(
                "save_email_config",
                self.ctx.api.save_email_config(&draft),
                "Email configuration saved",
                "Failed to save configuration",
            )
            .await?;

        self.config_form.lock().close();
        self.load_config().await;
        Ok(())
    }

    /// Start a reply to `email_id`, pre-filled with the backend's draft.
    ///
    /// Returns false when the email is not in the local copy.
    pub fn open_reply(&self, email_id: &str) -> bool {
        let draft = self.emails.with(|emails| {
            emails.iter().find(|email| email.id == email_id).map(|email| ReplyDraft {
                email_id: email.id.clone(),
                text: email.draft().unwrap_or_default().to_string(),
            })
        });

        match draft {
            Some(draft) => {
                self.reply.lock().open_with(draft);
                true
            }
            None => false,
        }
    }

    pub fn close_reply(&self) {
        self.reply.lock().close();
    }

    pub fn is_reply_open(&self) -> bool {
        self.reply.lock().is_open()
    }

    pub fn edit_reply(&self, text: impl Into<String>) {
        self.reply.lock().draft_mut().text = text.into();
    }

    pub fn reply_draft(&self) -> ReplyDraft {
        self.reply.lock().draft().clone()
    }

    /// `POST /emails/send` with the edited reply.
    #[instrument(skip(self))]
    pub async fn send_reply(&self) -> Result<()> {
        let draft = self.reply_draft();
        if is_blank(&draft.email_id) || is_blank(&draft.text) {
            return Err(self.ctx.reject("Response text is required"));
        }

        let body = SendReply { email_id: draft.email_id, response_text: draft.text };
        self.ctx
            .write("send_reply", self.ctx.api.send_reply(&body), "Email response sent", "Failed to send email")
            .await?;

        self.reply.lock().close_and_reset();
        self.load_emails().await;
        Ok(())
    }

    /// `POST /emails/action`
    #[instrument(skip(self))]
    pub async fn apply_action(&self, email_id: &str, action: EmailAction) -> Result<()> {
        let request = EmailActionRequest { email_id: email_id.to_string(), action };
        let success = match action {
            EmailAction::MarkRead => "Email marked as read",
            EmailAction::Archive => "Email archived",
        };

        self.ctx
            .write("email_action", self.ctx.api.email_action(&request), success, "Action failed")
            .await?;

        self.load_emails().await;
        Ok(())
    }
}

#[async_trait]
impl Page for EmailsPage {
    fn route(&self) -> Route {
        Route::Emails
    }

    async fn mount(&self) {
        futures::join!(self.load_emails(), self.load_config());
    }
}
