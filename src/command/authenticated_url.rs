//! Prints an authenticated repository URL for git operations.
use secrecy::ExposeSecret;

use crate::{
    cli::Args, forge::config::RemoteConfig, forge::url::url_with_access_token,
    result::Result,
};

/// Embeds the remote's token into `url`, or into the remote URL itself.
pub fn run(remote: &RemoteConfig, url: Option<&str>) -> Result<String> {
    let target = url.unwrap_or(&remote.url);
    url_with_access_token(remote.token.expose_secret(), target)
}

pub async fn execute(args: &Args, url: Option<&str>) -> Result<()> {
    let remote = args.get_remote()?;
    println!("{}", run(&remote, url)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn remote() -> RemoteConfig {
        RemoteConfig {
            url: "http://github.com/mitodl/release-script.git".into(),
            token: SecretString::from("access".to_string()),
            ..RemoteConfig::default()
        }
    }

    #[test]
    fn defaults_to_remote_url() {
        assert_eq!(
            run(&remote(), None).unwrap(),
            "https://access@github.com/mitodl/release-script.git"
        );
    }

    #[test]
    fn authenticates_given_url() {
        let url = Some("https://github.com/mitodl/other.git");
        assert_eq!(
            run(&remote(), url).unwrap(),
            "https://access@github.com/mitodl/other.git"
        );
    }
}
