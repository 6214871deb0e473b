use template_registry::service::server::{Configuration, Server};

#[derive(clap::Parser)]
pub(crate) struct Action {
    /// Path to the configuration toml file, default to /etc/template-registry/registry.toml.
    #[clap(
        short,
        long,
        default_value = "/etc/template-registry/registry.toml",
        env = "REGISTRY_CONFIG"
    )]
    pub config_path: String,
}

impl Action {
    pub(crate) async fn execute(self) -> Result<(), super::Error> {
        let config = Configuration::from_path(&self.config_path)
            .map_err(template_registry::service::server::Error::from)?;
        Server::from_config(config)?.run().await?;
        Ok(())
    }
}
