mod openapi;
mod serve;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Server(#[from] template_registry::service::server::Error),
    #[error("unable to serialize the openapi definition: {0}")]
    OpenApi(#[from] serde_json::Error),
}

#[derive(clap::Subcommand)]
pub(crate) enum Action {
    /// Run the template registry server
    Serve(serve::Action),
    /// Prints the open api schema
    OpenApi(openapi::Action),
}

impl Action {
    pub(crate) async fn execute(self) -> Result<(), Error> {
        match self {
            Self::Serve(inner) => inner.execute().await,
            Self::OpenApi(inner) => inner.execute(),
        }
    }
}
