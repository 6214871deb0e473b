use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, OnceLock};
use template_registry_store::Store;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to load configuration: {0}")]
    Configuration(#[from] config::ConfigError),
    #[error(transparent)]
    Cors(#[from] crate::service::cors::Error),
    #[error("unable to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    #[serde(default = "Configuration::default_host")]
    pub host: IpAddr,
    #[serde(default = "Configuration::default_port")]
    pub port: u16,
    //
    #[serde(default)]
    pub cors: crate::service::cors::Configuration,
    #[serde(default)]
    pub tracing: crate::service::tracing::Configuration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            cors: Default::default(),
            tracing: Default::default(),
        }
    }
}

impl Configuration {
    fn default_host() -> IpAddr {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }

    fn default_port() -> u16 {
        8000
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }

    /// Reads the optional toml file at `path`, then overrides it with the
    /// `REGISTRY_*` environment variables (`__` separates nested keys).
    pub fn from_path(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("REGISTRY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

/// The recorder is global to the process, so it's only installed once.
fn prometheus_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("a metrics recorder is already installed");
            }
            handle
        })
        .clone()
}

pub struct Server {
    socket_address: SocketAddr,
    store: Store,
    cors: CorsLayer,
    tracing: crate::service::tracing::Configuration,
    prometheus_handle: PrometheusHandle,
}

impl Server {
    pub fn new(
        socket_address: SocketAddr,
        store: Store,
        cors: CorsLayer,
        tracing: crate::service::tracing::Configuration,
        prometheus_handle: PrometheusHandle,
    ) -> Self {
        Self {
            socket_address,
            store,
            cors,
            tracing,
            prometheus_handle,
        }
    }

    pub fn from_config(config: Configuration) -> Result<Self, Error> {
        Ok(Self::new(
            config.address(),
            Store::default(),
            config.cors.build()?,
            config.tracing,
            prometheus_handle(),
        ))
    }

    /// Replaces the store, to start from already known templates.
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = store;
        self
    }

    pub fn app(self) -> axum::Router {
        use axum::extract::Extension;

        let router = crate::controller::create()
            .layer(Extension(self.store))
            .layer(Extension(Arc::new(self.prometheus_handle)))
            .layer(self.cors);
        self.tracing.add_layer(router)
    }

    pub async fn run(self) -> Result<(), Error> {
        let address = self.socket_address;
        tracing::info!("starting server on {address:?}");
        let tcp_listener = TcpListener::bind(&address)
            .await
            .map_err(|source| Error::Bind { address, source })?;

        axum::serve(tcp_listener, self.app().into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Error::Serve)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("unable to listen for ctrl+c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("unable to listen for sigterm: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("signal received, starting graceful shutdown");
}
