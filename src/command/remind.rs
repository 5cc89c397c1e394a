//! Schedules a reminder for authors with unchecked commits.
use chrono::{DateTime, Local, TimeZone};
use log::*;
use secrecy::SecretString;

use crate::{
    chat::{
        matcher::UserMatcher, slack::SlackClient, traits::ChatDirectory,
        types::ScheduleMessageRequest,
    },
    cli::Args,
    config::Config,
    forge::{github::Github, traits::PullRequestLister},
    release::get_release_status,
    reminder::build_reminder,
    result::Result,
    schedule::next_workday_at,
};

/// Options of the remind command.
#[derive(Debug, Clone)]
pub struct RemindOptions {
    pub channel: String,
    pub dry_run: bool,
}

/// Resolves unchecked authors, matches them to chat accounts and schedules
/// the reminder for the next business day after `now`. Returns the request
/// that was scheduled (or would have been, in dry-run mode).
pub async fn run<Tz: TimeZone>(
    forge: &dyn PullRequestLister,
    chat: &dyn ChatDirectory,
    config: &Config,
    opts: &RemindOptions,
    now: DateTime<Tz>,
) -> Result<Option<ScheduleMessageRequest>>
where
    Tz::Offset: std::fmt::Display,
{
    let Some(status) = get_release_status(forge, config).await? else {
        info!("no release pull request found: nothing to remind");
        return Ok(None);
    };

    if status.unchecked_authors.is_empty() {
        info!(
            "all commits are checked off for release {}",
            status.release.version
        );
        return Ok(None);
    }

    let users = chat.list_users().await?;
    let matcher = UserMatcher::new(config.match_threshold);

    let Some(reminder) = build_reminder(
        &matcher,
        &users,
        &status.unchecked_authors,
        &status.release,
    ) else {
        return Ok(None);
    };

    for name in reminder.unmatched.iter() {
        warn!("no chat account found for {name}: mentioning by name");
    }

    let post_at = next_workday_at(&now, config.reminder_hour)?;

    let req = ScheduleMessageRequest {
        channel: opts.channel.clone(),
        text: reminder.text,
        post_at: post_at.timestamp(),
    };

    if opts.dry_run {
        info!("dry_run: would schedule for {post_at}: {}", req.text);
        return Ok(Some(req));
    }

    info!("scheduling reminder in {} for {post_at}", req.channel);
    chat.schedule_message(req.clone()).await?;

    Ok(Some(req))
}

pub async fn execute(
    args: &Args,
    channel: &str,
    slack_token: &str,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load(args.config.as_deref()).await?;
    let forge = Github::new(args.get_remote()?)?;

    let slack_token = (!slack_token.is_empty())
        .then(|| SecretString::from(slack_token.to_string()));
    let chat = SlackClient::new(slack_token)?;

    let opts = RemindOptions {
        channel: channel.to_string(),
        dry_run,
    };

    run(&forge, &chat, &config, &opts, Local::now()).await?;

    Ok(())
}
