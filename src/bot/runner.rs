use std::{future::Future, time::Duration};

use tokio::time::sleep;

use crate::{
    Res, bot::CommandRouter, info, success, telegram::TelegramClient, types::Update, warning,
};

/// Polls Telegram and answers messages one at a time until `shutdown` resolves.
///
/// Polling errors are logged and retried after a short pause; a reply that
/// cannot be delivered is logged and dropped.
pub async fn run_until<F>(
    telegram: &TelegramClient,
    router: &CommandRouter,
    poll_timeout: u64,
    shutdown: F,
) -> Res<()>
where
    F: Future<Output = ()>,
{
    let me = telegram.get_me().await?;
    success!(
        "Bot started: @{}",
        me.username.as_deref().unwrap_or(&me.first_name)
    );

    tokio::pin!(shutdown);
    let mut offset: Option<i64> = None;

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Stopping bot");
                return Ok(());
            }
            polled = telegram.get_updates(offset, poll_timeout) => match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        handle_update(telegram, router, update).await;
                    }
                }
                Err(e) => {
                    warning!("Polling Telegram failed: {}", e);
                    sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }
}

async fn handle_update(telegram: &TelegramClient, router: &CommandRouter, update: Update) {
    let Some(message) = update.message else {
        return;
    };
    let Some(text) = message.text else {
        return;
    };

    let reply = router.handle(&text).await;
    if let Err(e) = telegram
        .send_message(message.chat.id, &reply.text, reply.keyboard.as_ref())
        .await
    {
        warning!("Failed to reply in chat {}: {}", message.chat.id, e);
    }
}
