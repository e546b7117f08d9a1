use crate::config::{Config, ScoopRoot};
use crate::error::Result;
use crate::remote::{GithubClient, RemoteSearcher};

pub struct AppContext {
    pub root: ScoopRoot,
    pub config: Config,
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = Config::load()?;
        if cli.no_remote {
            config.remote.enabled = false;
        }
        let root = config.scoop_root()?;

        Ok(Self {
            root,
            config,
            robot_mode: cli.robot,
        })
    }

    /// `None` when the remote tier is switched off.
    pub fn remote_searcher(&self) -> Result<Option<RemoteSearcher>> {
        if !self.config.remote.enabled {
            return Ok(None);
        }
        let client = GithubClient::new(&self.config.remote)?;
        Ok(Some(RemoteSearcher::new(client, &self.root)))
    }
}
