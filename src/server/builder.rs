//! ServerBuilder for fluent API to build HTTP servers

use super::router::{build_resource_routes, health_routes, not_found};
use super::state::AppState;
use crate::config::ServerConfig;
use crate::core::{HexIdGenerator, IdGenerator, Resource, Store};
use crate::dishes::Dish;
use crate::orders::Order;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP server
///
/// Stores and the id generator are injected; anything left unset falls back
/// to an in-memory store and random hex ids.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_dish_store(InMemoryStore::new())
///     .with_order_store(InMemoryStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    dishes: Option<Arc<dyn Store<Dish>>>,
    orders: Option<Arc<dyn Store<Order>>>,
    ids: Option<Arc<dyn IdGenerator>>,
    config: ServerConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            dishes: None,
            orders: None,
            ids: None,
            config: ServerConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the dish store
    pub fn with_dish_store(mut self, store: impl Store<Dish> + 'static) -> Self {
        self.dishes = Some(Arc::new(store));
        self
    }

    /// Set the order store
    pub fn with_order_store(mut self, store: impl Store<Order> + 'static) -> Self {
        self.orders = Some(Arc::new(store));
        self
    }

    /// Set the identifier generator used for new resources
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Arc::new(ids));
        self
    }

    /// Set the server configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared handler state
    pub fn build_state(&mut self) -> Result<AppState> {
        let dishes = match self.dishes.take() {
            Some(store) => store,
            None => default_store::<Dish>()?,
        };
        let orders = match self.orders.take() {
            Some(store) => store,
            None => default_store::<Order>()?,
        };
        let ids = self
            .ids
            .take()
            .unwrap_or_else(|| Arc::new(HexIdGenerator));

        Ok(AppState::new(dishes, orders, ids))
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Health check routes
    /// - Dish and order routes
    /// - Custom routes
    /// - A JSON 404 fallback
    ///
    /// wrapped in request tracing and, when enabled, CORS.
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;

        let mut app = health_routes().merge(build_resource_routes(state));
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }
        app = app.fallback(not_found);

        let app = app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
        if self.config.cors {
            Ok(app.layer(CorsLayer::permissive()))
        } else {
            Ok(app)
        }
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "in-memory")]
fn default_store<T: Resource>() -> Result<Arc<dyn Store<T>>> {
    Ok(Arc::new(crate::storage::InMemoryStore::<T>::new()))
}

#[cfg(not(feature = "in-memory"))]
fn default_store<T: Resource>() -> Result<Arc<dyn Store<T>>> {
    Err(anyhow::anyhow!(
        "No store configured for {}. Call .with_{}_store()",
        T::resource_name(),
        T::label().to_lowercase()
    ))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
